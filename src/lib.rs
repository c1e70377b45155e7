//! Restful: a minimal command-line client for a fixed JSON REST API
//!
//! Sends one GET or POST request and renders the JSON response to stdout, a
//! pretty-printed JSON file, or a CSV file.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod request;
pub mod transport;
