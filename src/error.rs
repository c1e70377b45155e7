//! Error types for the restful client.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering a response to its output target
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Console write failed: {0}")]
    Console(#[from] std::io::Error),

    #[error("CSV output requires a list of objects, got {0}")]
    NotARecordList(String),

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised anywhere between argument parsing and process exit
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request body is not valid JSON: {0}")]
    InvalidRequestBody(#[source] serde_json::Error),

    #[error("Method '{0}' requires a request body (-d/--data)")]
    MissingRequestBody(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Response body is not valid JSON (status {status}): {message}")]
    InvalidResponseBody { status: u16, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::ConfigError(err.to_string())
    }
}
