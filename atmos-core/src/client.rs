//! Client for the WeatherAPI.com HTTP API.

use std::time::Duration;

use chrono::{Duration as ChronoDuration, Local, NaiveDate};
use reqwest::Client;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::WeatherData;

const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How far ahead WeatherAPI.com serves forecasts.
const MAX_FORECAST_DAYS: u8 = 14;

/// A handle to the WeatherAPI.com service.
///
/// Holds the API key for its lifetime and attaches it to every request as
/// the `key` query parameter. Each call is a stateless one-shot
/// request/response cycle; there is no retry, no caching and no shared
/// mutable state, so a single client can be used from multiple tasks.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherClient {
    /// Create a client for the default WeatherAPI.com endpoint.
    ///
    /// Fails with [`Error::MissingApiKey`] when the key is empty or blank.
    /// Does not contact the network.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default base endpoint.
    ///
    /// Useful for pointing the client at a mock server in tests.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }

        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { api_key, base_url: base_url.into(), http })
    }

    /// The base endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch current conditions for a city.
    ///
    /// `language` is an optional language code forwarded verbatim to the
    /// upstream `lang` parameter; the client does not validate it.
    ///
    /// The returned [`WeatherData`] has `location` and `current` populated
    /// and no `forecast`.
    pub async fn get_current_weather(
        &self,
        city_name: &str,
        language: Option<&str>,
    ) -> Result<WeatherData> {
        if city_name.trim().is_empty() {
            return Err(Error::MissingParams);
        }

        let mut params = vec![("q", city_name.to_string())];
        if let Some(lang) = language {
            params.push(("lang", lang.to_string()));
        }

        self.fetch("/current.json", &params).await
    }

    /// Fetch a multi-day forecast for a city.
    ///
    /// `days` must be in `1..=14`. `dt`, when given, must be a `YYYY-MM-DD`
    /// date between today and 14 days ahead (local time); it restricts the
    /// forecast to that single day. All validation happens before any
    /// network I/O.
    ///
    /// The returned [`WeatherData`] has `location`, `current` and `forecast`
    /// populated; forecast days keep the upstream chronological order.
    pub async fn get_forecast(
        &self,
        city_name: &str,
        days: u8,
        dt: Option<&str>,
    ) -> Result<WeatherData> {
        if city_name.trim().is_empty() {
            return Err(Error::MissingParams);
        }
        validate_days(days)?;
        if let Some(dt) = dt {
            validate_date(dt, Local::now().date_naive())?;
        }

        let mut params = vec![("q", city_name.to_string()), ("days", days.to_string())];
        if let Some(dt) = dt {
            params.push(("dt", dt.to_string()));
        }

        self.fetch("/forecast.json", &params).await
    }

    /// Perform one GET against `endpoint` with the key attached and map the
    /// response body into [`WeatherData`].
    async fn fetch(&self, endpoint: &str, params: &[(&str, String)]) -> Result<WeatherData> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "sending request to WeatherAPI.com");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(Error::Api { status: status.as_u16(), message: truncate_body(&body) });
        }

        let data: WeatherData = serde_json::from_str(&body)?;
        Ok(data)
    }
}

fn validate_days(days: u8) -> Result<()> {
    if (1..=MAX_FORECAST_DAYS).contains(&days) { Ok(()) } else { Err(Error::InvalidDays { days }) }
}

/// Check that `dt` is a `YYYY-MM-DD` date within `today..=today + 14 days`.
///
/// `today` is a parameter so tests can pin the clock.
fn validate_date(dt: &str, today: NaiveDate) -> Result<()> {
    let date = NaiveDate::parse_from_str(dt, "%Y-%m-%d").map_err(|_| Error::InvalidDateFormat)?;

    let last = today + ChronoDuration::days(i64::from(MAX_FORECAST_DAYS));
    if date < today || date > last {
        return Err(Error::DateOutOfRange);
    }

    Ok(())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Back off to a char boundary; slicing mid-character would panic.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    format!("{}...", &body[..end])
}
