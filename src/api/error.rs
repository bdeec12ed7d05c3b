//! Marketplace API error types
//!
//! Errors that can occur while talking to the marketplace REST API.

use thiserror::Error;

/// Errors returned by the marketplace API client
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (connection, timeout, TLS)
    #[error("Failed to reach the marketplace API: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Marketplace API returned status {status}{}", status_suffix(.message))]
    Status {
        /// HTTP status code
        status: u16,
        /// Human-readable `message` from the error body, if one was sent
        message: Option<String>,
    },

    /// A success response could not be parsed
    #[error("Failed to parse marketplace API response: {0}")]
    Decode(String),

    /// The request task ended before reporting a result
    #[error("Request was interrupted before completing")]
    Interrupted,
}

fn status_suffix(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(": {}", message),
        None => String::new(),
    }
}

impl ApiError {
    /// Message supplied by the server, suitable for showing to the user
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}
