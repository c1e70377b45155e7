//! Logging System
//!
//! Structured logging using the `tracing` crate. Standard output carries the
//! response, so log lines only ever go to stderr or a file.

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Master switch; when false nothing is logged
    #[serde(default)]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, file, file+stderr
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output includes "file")
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format on stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Default log file: `<state dir>/restful.log`, falling back to the local data dir.
pub fn default_log_file_path() -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "restful")?;
    let base = dirs
        .state_dir()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| dirs.data_local_dir().to_path_buf());
    Some(base.join("restful.log"))
}

/// Output destinations
#[derive(Debug, PartialEq, Eq)]
struct OutputDestinations {
    stderr: bool,
    file: bool,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (RESTFUL_LOG, RESTFUL_LOG_FORMAT, RESTFUL_LOG_OUTPUT)
/// 2. The given config (already merged with CLI flags)
/// 3. Defaults
pub fn init_logging(config: &LoggingConfig) -> Result<(), ClientError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let json = determine_format(config)? == "json";
    let output = determine_output(config)?;

    let layer: BoxedLayer = if output.file {
        let path = config
            .file
            .clone()
            .or_else(default_log_file_path)
            .ok_or_else(|| ClientError::ConfigError("No log file path available".to_string()))?;
        let file = open_log_file(&path)?;
        let writer = Mutex::new(file);
        match (json, output.stderr) {
            (true, true) => fmt::layer()
                .json()
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(writer.and(std::io::stderr))
                .boxed(),
            (true, false) => fmt::layer()
                .json()
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(writer)
                .boxed(),
            (false, true) => fmt::layer()
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(false)
                .with_writer(writer.and(std::io::stderr))
                .boxed(),
            (false, false) => fmt::layer()
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(false)
                .with_writer(writer)
                .boxed(),
        }
    } else if json {
        fmt::layer()
            .json()
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(config.color)
            .with_writer(std::io::stderr)
            .boxed()
    };

    Registry::default()
        .with(layer)
        .with(filter)
        .try_init()
        .map_err(|e| ClientError::ConfigError(format!("Failed to install logger: {}", e)))
}

fn open_log_file(path: &Path) -> Result<std::fs::File, ClientError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ClientError::ConfigError(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ClientError::ConfigError(format!("Failed to open log file {:?}: {}", path, e)))
}

/// Build environment filter from RESTFUL_LOG or the config
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ClientError> {
    if let Ok(filter) = EnvFilter::try_from_env("RESTFUL_LOG") {
        return Ok(filter);
    }

    let mut filter = EnvFilter::try_new(&config.level)
        .map_err(|e| ClientError::ConfigError(format!("Invalid log level: {}", e)))?;

    for (module, module_level) in &config.modules {
        let directive = format!("{}={}", module, module_level);
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| ClientError::ConfigError(format!("Invalid log directive: {}", e)))?,
        );
    }

    Ok(filter)
}

fn determine_format(config: &LoggingConfig) -> Result<String, ClientError> {
    if let Ok(format) = std::env::var("RESTFUL_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    match config.format.as_str() {
        "json" | "text" => Ok(config.format.clone()),
        other => Err(ClientError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

fn determine_output(config: &LoggingConfig) -> Result<OutputDestinations, ClientError> {
    if let Ok(output) = std::env::var("RESTFUL_LOG_OUTPUT") {
        return parse_output_destinations(&output);
    }
    parse_output_destinations(&config.output)
}

fn parse_output_destinations(output: &str) -> Result<OutputDestinations, ClientError> {
    match output {
        "stderr" => Ok(OutputDestinations {
            stderr: true,
            file: false,
        }),
        "file" => Ok(OutputDestinations {
            stderr: false,
            file: true,
        }),
        "file+stderr" => Ok(OutputDestinations {
            stderr: true,
            file: true,
        }),
        _ => Err(ClientError::ConfigError(format!(
            "Invalid log output: {} (must be 'stderr', 'file', or 'file+stderr')",
            output
        ))),
    }
}
