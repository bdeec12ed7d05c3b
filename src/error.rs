//! Error types for application startup
//!
//! Runtime failures inside the dashboard (validation, requests, storage)
//! never escape as errors; they end in a notice or a silent fallback.
//! What remains are the failures that stop the client from starting.

use crate::api::ApiError;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The async runtime could not be started
    #[error("Failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    /// The marketplace API client could not be constructed
    #[error("Failed to create API client: {0}")]
    Api(#[from] ApiError),

    /// The native window failed to open or crashed
    #[error("GUI error: {0}")]
    Gui(String),
}

impl From<eframe::Error> for AppError {
    fn from(err: eframe::Error) -> Self {
        AppError::Gui(err.to_string())
    }
}
