//! Email relay client.
//!
//! Client-side (csr): a JSON `POST` to the relay endpoint via `gloo-net`.
//! Native builds: `send` reports `RelayError::Unavailable`, since the relay
//! is only meaningful from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a `RelayError` so the contact form can show
//! its failure banner and keep the user's input for a retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use std::collections::BTreeMap;

use serde::Serialize;

use super::config::{ConfigError, RelayConfig};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Request(String),
    #[error("relay responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("relay not available outside the browser")]
    Unavailable,
    #[error("relay config invalid: {0}")]
    Config(#[from] ConfigError),
}

/// Request body accepted by the relay's send endpoint.
#[derive(Debug, Serialize)]
pub struct EmailRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a BTreeMap<String, String>,
}

/// Pair the configured identifiers with the submitted form fields.
pub fn build_request<'a>(config: &'a RelayConfig, fields: &'a BTreeMap<String, String>) -> EmailRequest<'a> {
    EmailRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: fields,
    }
}

/// Send `fields` through the relay.
///
/// # Errors
///
/// Returns `RelayError` on transport failure, a non-2xx response, or when no
/// browser runtime is present.
pub async fn send(config: &RelayConfig, fields: &BTreeMap<String, String>) -> Result<(), RelayError> {
    #[cfg(feature = "csr")]
    {
        let body = build_request(config, fields);
        let resp = gloo_net::http::Request::post(&config.endpoint)
            .json(&body)
            .map_err(|e| RelayError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Request(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RelayError::Status { status, body });
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, fields);
        Err(RelayError::Unavailable)
    }
}
