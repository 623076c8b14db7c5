//! Geocoding client error types.

use std::fmt;

/// Errors from the geocoding HTTP client.
#[derive(Debug)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// Response body could not be decoded
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// The query matched no places
    NoResults,
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::Http(e) => write!(f, "HTTP error: {e}"),
            GeocodeError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            GeocodeError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            GeocodeError::NoResults => write!(f, "no results for query"),
        }
    }
}

impl std::error::Error for GeocodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeocodeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        GeocodeError::Http(err)
    }
}
