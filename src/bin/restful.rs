//! Restful CLI Binary
//!
//! Command-line entry point: one request, one rendered response.

use clap::Parser;
use restful::cli::{map_error, Cli, RunContext};
use restful::config::{ConfigLoader, RestfulConfig};
use restful::error::ClientError;
use restful::logging::init_logging;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging early
    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Restful CLI starting");

    let context = match RunContext::new(config) {
        Ok(ctx) => {
            info!(base_url = %ctx.config().api.base_url, "CLI context initialized");
            ctx
        }
        Err(e) => {
            error!("Error initializing client: {}", e);
            eprintln!("{}", map_error(&e));
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match context.execute(&cli, &mut out) {
        Ok(outcome) => {
            info!(code = outcome.code(), "Command completed");
            outcome.into()
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            ExitCode::FAILURE
        }
    }
}

/// Build configuration from the config files, environment, and CLI flags.
/// Precedence: CLI flags override environment override config files override defaults.
fn build_config(cli: &Cli) -> Result<RestfulConfig, ClientError> {
    let mut config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    if let Some(ref base_url) = cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.api.request_timeout_secs = timeout;
    }
    config.validate().map_err(ClientError::ConfigError)?;

    let logging = &mut config.logging;
    if cli.verbose {
        logging.enabled = true;
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.enabled = true;
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    Ok(config)
}
