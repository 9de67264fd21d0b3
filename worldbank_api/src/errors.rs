//! Error types for the API client.

use std::fmt;

use serde::Deserialize;

/// Fixed message attached to 5xx faults.
pub(crate) const SERVER_ERROR_MESSAGE: &str = "invalid server error";

/// A single `{id, key, value}` message from the API's error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorMessage {
    pub id: String,
    pub key: String,
    pub value: String,
}

/// Application-level failure reported by the API.
///
/// The API returns these inside an HTTP 200 response, so the nominal
/// `status` recorded here is almost always 200. The `url` is the full
/// request URL that produced the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub messages: Vec<ErrorMessage>,
    pub url: String,
    pub status: u16,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.messages.first() {
            Some(msg) => write!(
                f,
                "API error {} ({}): {} [{} {}]",
                msg.key, msg.id, msg.value, self.status, self.url
            ),
            None => write!(f, "API error [{} {}]", self.status, self.url),
        }
    }
}

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Request inputs failed validation; no request was sent.
    #[error("invalid request: {0}")]
    Validation(String),
    /// The API reported an error in its response body.
    #[error("{0}")]
    Api(ErrorResponse),
    /// The API returned a 5xx status.
    #[error("{message} ({status}) from {url}")]
    Server {
        url: String,
        status: u16,
        message: &'static str,
    },
    /// The response body matched neither the error nor the success envelope.
    #[error("failed to decode response from {url}")]
    Decode { url: String },
    /// The HTTP round trip itself failed.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
