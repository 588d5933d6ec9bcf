//! HTTP transport layer
//!
//! Design Decision: Abstract transport trait injected into the invoker
//!
//! The invoker owns the policy (status handling, JSON extraction, deadline);
//! the transport only moves bytes. Keeping the seam as a trait lets unit
//! tests script responses with a mockall mock while production code uses
//! reqwest and its connection pool.

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::redirect::Policy;
use reqwest::{Client, ClientBuilder};

use crate::error::{PraisonAiError, Result};

/// Raw HTTP response handed back to the invoker
///
/// The body is kept as text; JSON parsing is the invoker's job so that a
/// non-JSON body can be classified as a malformed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Core transport trait for reaching the workflow service
///
/// Error Conditions:
/// - Timeout: Return `PraisonAiError::Timeout`
/// - Unreachable host / refused connection: Return `PraisonAiError::Connection`
///
/// Implementations must not interpret the status code; a 500 is a successful
/// transport round trip.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST a JSON body to `url` and wait at most `timeout` for the full response
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        timeout: Duration,
    ) -> Result<TransportResponse>;
}

/// reqwest-backed transport
///
/// The inner `Client` is cheap to clone and pools connections, so one
/// transport can be shared by every tool in a process. Redirects are never
/// followed: a 3xx is handed back as-is and each call is exactly one request.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Transport with a default client
    ///
    /// # Errors
    /// `Configuration` if the HTTP client cannot be built (e.g. TLS backend
    /// initialization failed).
    pub fn new() -> Result<Self> {
        Self::from_builder(Client::builder())
    }

    /// Build from a caller-tuned builder (proxy settings, TLS roots, ...)
    ///
    /// The redirect policy is overridden to `Policy::none()`.
    pub fn from_builder(builder: ClientBuilder) -> Result<Self> {
        let client = builder.redirect(Policy::none()).build().map_err(|e| {
            PraisonAiError::Configuration(format!("Failed to build HTTP client: {}", e))
        })?;
        Ok(Self { client })
    }

    /// Use a fully preconfigured client
    ///
    /// The client is used untouched. Build it with
    /// `.redirect(reqwest::redirect::Policy::none())`, otherwise a 3xx reply
    /// triggers a second request (a body-less GET for 301/302/303).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        timeout: Duration,
    ) -> Result<TransportResponse> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(e, timeout))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| classify(e, timeout))?;

        Ok(TransportResponse { status, body })
    }
}

fn classify(err: reqwest::Error, timeout: Duration) -> PraisonAiError {
    if err.is_builder() {
        // The request never left the process: bad base URL
        PraisonAiError::Configuration(format!("Invalid request URL: {}", err))
    } else if err.is_timeout() {
        PraisonAiError::Timeout(timeout)
    } else {
        PraisonAiError::Connection(err.to_string())
    }
}
