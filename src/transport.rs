//! HTTP Transport
//!
//! Sends a single `RequestSpec` and hands back the status code and decoded JSON
//! body. `ReqwestTransport` talks to the network; `MockTransport` replays canned
//! responses for tests.

use crate::error::ClientError;
use crate::render::{is_success, Response};
use crate::request::{Method, RequestSpec};
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Client;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Performs one HTTP exchange
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: &RequestSpec) -> Result<Response, ClientError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn send(&self, request: &RequestSpec) -> Result<Response, ClientError> {
        (**self).send(request).await
    }
}

// Map reqwest failures to a transport error, keeping the failure class visible
fn map_http_error(error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::Transport(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ClientError::Transport(format!("Connection error: {}", error))
    } else {
        ClientError::Transport(format!("HTTP error: {}", error))
    }
}

/// Transport backed by `reqwest::Client`
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Client honoring the usual proxy environment variables.
    pub fn new(connect_timeout: Duration, request_timeout: Duration) -> Result<Self, ClientError> {
        Self::build(Client::builder(), connect_timeout, request_timeout)
    }

    #[cfg(test)]
    fn direct(connect_timeout: Duration, request_timeout: Duration) -> Result<Self, ClientError> {
        Self::build(Client::builder().no_proxy(), connect_timeout, request_timeout)
    }

    fn build(
        builder: reqwest::ClientBuilder,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = builder
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &RequestSpec) -> Result<Response, ClientError> {
        info!(method = %request.method, url = %request.url, "Sending request");

        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => {
                let builder = self.client.post(&request.url);
                match &request.body {
                    Some(body) => builder.json(body),
                    None => builder,
                }
            }
        };

        let response = builder.send().await.map_err(map_http_error)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(map_http_error)?;
        debug!(status, bytes = text.len(), "Received response");

        // Only successful responses are rendered, so only they must be JSON.
        if !is_success(status) {
            return Ok(Response::new(status, Value::Null));
        }

        let body = serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponseBody {
            status,
            message: e.to_string(),
        })?;
        Ok(Response::new(status, body))
    }
}

/// Transport that replays queued responses and records what was sent
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Response>>,
    requests: Mutex<Vec<RequestSpec>>,
}

impl MockTransport {
    pub fn new(responses: Vec<Response>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<RequestSpec> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: &RequestSpec) -> Result<Response, ClientError> {
        self.requests.lock().push(request.clone());
        self.responses
            .lock()
            .pop_front()
            .ok_or_else(|| ClientError::Transport("No mock responses remaining".to_string()))
    }
}
