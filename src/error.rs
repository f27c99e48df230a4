//! Unified SDK error types.

use crate::domain::quote::ValidationError;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Malformed response: {0}")]
    Malformed(#[from] ValidationError),

    #[error("Config error: {0}")]
    Config(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("{0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Empty response body")]
    EmptyResponse,

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SdkError {
    /// The message carried by a `LoadState::Failure` for this error.
    pub fn failure_message(&self) -> String {
        match self {
            SdkError::Http(http) => http.failure_message(),
            SdkError::Malformed(err) => network_error(&err.to_string()),
            SdkError::Config(msg) => network_error(msg),
        }
    }
}

impl HttpError {
    pub fn failure_message(&self) -> String {
        match self {
            HttpError::Status { status, message } => {
                format!("API error: {} {}", status, message).trim_end().to_string()
            }
            HttpError::EmptyResponse => "empty response".to_string(),
            #[cfg(feature = "http")]
            HttpError::Reqwest(err) => network_error(&err.to_string()),
            HttpError::Transport(detail) => network_error(detail),
            HttpError::Timeout => network_error(&self.to_string()),
            HttpError::Decode(err) => network_error(&err.to_string()),
        }
    }
}

fn network_error(detail: &str) -> String {
    let detail = detail.trim();
    if detail.is_empty() {
        "network error: unknown".to_string()
    } else {
        format!("network error: {}", detail)
    }
}
