//! Core library for the `atmos` weather client.
//!
//! This crate defines:
//! - A client for the WeatherAPI.com HTTP API (current weather & forecast)
//! - The response data model (location, current conditions, forecast days)
//! - A typed error taxonomy for validation and request failures
//! - Configuration & credentials handling
//!
//! It is used by `atmos-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::WeatherClient;
pub use config::Config;
pub use error::{Error, Result};
pub use model::{Astro, Condition, Current, Day, Forecast, ForecastDay, Hour, Location, WeatherData};
