//! Response data model for WeatherAPI.com.
//!
//! Field names mirror the upstream JSON verbatim and every numeric value is
//! kept in the units the API returned (the API already provides dual C/F
//! temperatures, so no conversion happens here). All types are plain
//! immutable value objects built once at parse time.

use serde::{Deserialize, Serialize};

/// Weather condition details (description text, icon URL, condition code).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}

/// Current conditions at the requested location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_epoch: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_f: Option<f64>,
    /// 1 during daytime, 0 at night.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_day: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

/// Geographical location the response resolves to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tz_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localtime_epoch: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localtime: Option<String>,
}

/// Daily aggregate block of a forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxtemp_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mintemp_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxtemp_f: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mintemp_f: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totalprecip_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_chance_of_rain: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_chance_of_snow: Option<u8>,
}

/// Sunrise/sunset strings as reported upstream, e.g. "06:12 AM".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Astro {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
}

/// One hourly record within a forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hour {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feelslike_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chance_of_rain: Option<u8>,
}

/// One daily aggregate record within a multi-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Forecast date in `YYYY-MM-DD` form.
    pub date: String,
    pub date_epoch: i64,
    pub day: Day,
    pub astro: Astro,
    /// Hourly breakdown, in upstream order.
    #[serde(default)]
    pub hour: Vec<Hour>,
}

/// Multi-day forecast, chronological ascending as returned upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

/// Top-level result of both client calls.
///
/// `location` and `current` are always present; a response missing either
/// key is rejected at deserialization time. `forecast` is populated only
/// when a forecast was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub location: Location,
    pub current: Current,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Forecast>,
}
