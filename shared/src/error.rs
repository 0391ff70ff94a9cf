//! Failure taxonomy for calls against the article service.

use thiserror::Error;

/// Why a request against the article service failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error: {status}{}", detail(.message))]
    Http {
        /// Status code.
        status: u16,
        /// `message` field of a JSON error body, if one was sent.
        message: Option<String>,
    },
    /// The response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),
    /// The request could not be built locally.
    #[error("Request error: {0}")]
    Request(String),
}

impl ApiError {
    /// Builds an [`ApiError::Http`] from a status and raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(|m| m.trim().to_string())
            })
            .filter(|m| !m.is_empty());
        ApiError::Http { status, message }
    }
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(text) => format!(" ({text})"),
        None => String::new(),
    }
}
