//! CLI route: run context and the single request/render route.

use crate::config::RestfulConfig;
use crate::error::ClientError;
use crate::render::{render, OutputTarget, Outcome};
use crate::request::build_request;
use crate::transport::{HttpTransport, ReqwestTransport};
use std::io::Write;
use tracing::{debug, info};

use crate::cli::parse::Cli;

/// Runtime context for CLI execution: resolved config and the transport.
pub struct RunContext {
    config: RestfulConfig,
    transport: Box<dyn HttpTransport>,
}

impl RunContext {
    /// Create run context with a network transport built from `config`.
    pub fn new(config: RestfulConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(
            config.api.connect_timeout(),
            config.api.request_timeout(),
        )?;
        Ok(Self::with_transport(config, Box::new(transport)))
    }

    /// Create run context with a caller-supplied transport.
    pub fn with_transport(config: RestfulConfig, transport: Box<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &RestfulConfig {
        &self.config
    }

    /// Build the request, send it, and render the response to `out`.
    pub fn execute<W: Write>(&self, cli: &Cli, out: &mut W) -> Result<Outcome, ClientError> {
        let request = build_request(
            &self.config.api.base_url,
            cli.method,
            &cli.endpoint,
            cli.data.as_deref(),
        )?;
        let target = OutputTarget::from_output_arg(cli.output.as_deref());
        debug!(?target, "Resolved output target");

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to create runtime: {}", e)))?;
        let response = runtime.block_on(self.transport.send(&request))?;
        info!(status = response.status_code, "Response received");

        Ok(render(&response, &target, out)?)
    }
}
