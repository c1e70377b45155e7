//! Request building: method, full URL, and parsed JSON body.

use crate::error::ClientError;
use clap::ValueEnum;
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// Default API root; endpoints are appended verbatim.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "get"),
            Method::Post => write!(f, "post"),
        }
    }
}

/// A fully resolved request, ready for the transport
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

/// Join the base URL and the endpoint fragment.
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    if endpoint.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), endpoint)
    } else {
        format!("{}{}", base_url, endpoint)
    }
}

/// Build the request for `method` against `endpoint`.
///
/// `post` needs `data`, which is parsed as JSON here so bad input never reaches
/// the network. `get` ignores `data`.
pub fn build_request(
    base_url: &str,
    method: Method,
    endpoint: &str,
    data: Option<&str>,
) -> Result<RequestSpec, ClientError> {
    let url = join_url(base_url, endpoint);

    let body = match method {
        Method::Get => {
            if data.is_some() {
                warn!("Ignoring request body for GET request");
            }
            None
        }
        Method::Post => {
            let raw = data.ok_or_else(|| ClientError::MissingRequestBody(method.to_string()))?;
            Some(serde_json::from_str(raw).map_err(ClientError::InvalidRequestBody)?)
        }
    };

    Ok(RequestSpec { method, url, body })
}
