//! Errors returned by the places API client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the credentials (any non-OK login response).
    #[error("Login failed: {status_text}")]
    LoginFailed { status: u16, status_text: String },

    /// A list or detail request came back with a non-OK status.
    #[error("Request failed with status {status}: {status_text}")]
    FetchFailed { status: u16, status_text: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not the JSON shape we expected.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// HTTP status of a non-OK response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::LoginFailed { status, .. } | Self::FetchFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server answered, but not with success.
    pub fn is_rejection(&self) -> bool {
        self.status().is_some()
    }

    /// Short human-readable reason, suitable for an alert.
    pub fn reason(&self) -> String {
        match self {
            Self::LoginFailed { status_text, .. } | Self::FetchFailed { status_text, .. } => {
                status_text.clone()
            }
            Self::Network(message) | Self::InvalidUrl(message) => message.clone(),
            Self::Decode(e) => e.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}
