//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ClientError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ClientError) -> String {
    match e {
        ClientError::MissingRequestBody(_) | ClientError::InvalidRequestBody(_) => {
            format!("Error: {}\nExample: -d '{{\"title\": \"foo\", \"userId\": 1}}'", e)
        }
        _ => format!("Error: {}", e),
    }
}
