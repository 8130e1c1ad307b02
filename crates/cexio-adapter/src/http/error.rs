/*
[INPUT]:  Error sources (HTTP transport, status codes, URLs, configuration)
[OUTPUT]: Structured error type for the whole crate
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the CEX.IO adapter
#[derive(Error, Debug)]
pub enum CexioError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with anything other than 200 OK
    ///
    /// Displays as the status line, e.g. `404 Not Found`, or just the code
    /// when the status has no registered reason phrase.
    #[error("{}", status_line(*status))]
    Status { status: StatusCode },

    /// Private endpoint called on a client without credentials
    #[error("credentials required for private endpoint `{endpoint}`")]
    MissingCredentials { endpoint: &'static str },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid request parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CexioError {
    /// HTTP status of a non-200 reply
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CexioError::Status { status } => Some(*status),
            CexioError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            CexioError::MissingCredentials { .. } => true,
            _ => matches!(
                self.status(),
                Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
            ),
        }
    }
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}

/// Result type alias for CEX.IO operations
pub type Result<T> = std::result::Result<T, CexioError>;
