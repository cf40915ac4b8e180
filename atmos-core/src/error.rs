use thiserror::Error;

/// Convenience alias used throughout the client.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when talking to WeatherAPI.com.
///
/// Validation variants are raised before any network I/O; `Api`, `Transport`
/// and `Parse` describe a request that actually went out. Nothing here is
/// retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// The client was constructed with an empty API key.
    #[error("API key is missing.")]
    MissingApiKey,

    /// A required request parameter (city name) was empty.
    #[error("Missing parameters for the request.")]
    MissingParams,

    /// Forecast `days` outside the supported range.
    #[error("The number of days must be between 1 and 14, got {days}.")]
    InvalidDays { days: u8 },

    /// Forecast `dt` did not parse as a calendar date.
    #[error("The date must be in the format YYYY-MM-DD.")]
    InvalidDateFormat,

    /// Forecast `dt` parsed but is not within the forecast window.
    #[error("The date must be between today and the next 14 days.")]
    DateOutOfRange,

    /// The upstream API answered with a non-success HTTP status.
    #[error("Error {status}: {message}")]
    Api { status: u16, message: String },

    /// The request could not be sent or its body could not be read.
    #[error("Request to WeatherAPI.com failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered 2xx but the body was not valid weather JSON.
    #[error("Failed to parse WeatherAPI.com response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status code for `Api` errors, `None` for everything else.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
