//! CLI parse: clap types for restful. No behavior; definitions only.

use crate::request::Method;
use clap::Parser;
use std::path::PathBuf;

/// Simple REST client for JSONPlaceholder.
#[derive(Parser, Debug)]
#[command(name = "restful", version)]
#[command(about = "Simple REST client for JSONPlaceholder.")]
pub struct Cli {
    /// Request method
    #[arg(value_enum)]
    pub method: Method,

    /// Request endpoint URI fragment
    pub endpoint: String,

    /// Data to send with request
    #[arg(short, long)]
    pub data: Option<String>,

    /// Output to .json or .csv file (default: dump to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Enable verbose logging to stderr (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
