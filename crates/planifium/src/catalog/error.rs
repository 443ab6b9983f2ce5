//! Error types for the catalog client.

use thiserror::Error;

/// Errors that can occur while talking to the Planifium catalog.
///
/// All of these are recovered per course by the schedule assembler (the
/// course is excluded from the assembled result); none of them abort a
/// request.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network/HTTP transport failure
    #[error("network error: {message}")]
    Network { message: String },

    /// Request exceeded the configured timeout
    #[error("catalog request timed out: {message}")]
    Timeout { message: String },

    /// Catalog returned a non-success status (other than 404)
    #[error("catalog returned status {status}")]
    Status { status: u16 },

    /// Response body could not be parsed as a course payload
    #[error("malformed catalog payload: {message}")]
    Malformed { message: String },

    /// Base URL configuration is invalid
    #[error("URL error: {message}")]
    UrlError { message: String },
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            CatalogError::Malformed {
                message: err.to_string(),
            }
        } else {
            CatalogError::Network {
                message: err.to_string(),
            }
        }
    }
}

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::UrlError {
            message: err.to_string(),
        }
    }
}
