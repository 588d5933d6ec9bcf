//! Invoker: one request/response exchange against the workflow service
//!
//! Flow:
//! 1. Resolve the endpoint from the descriptor
//! 2. POST `{"query": ...}` through the injected transport
//! 3. Enforce the descriptor timeout over the whole round trip
//! 4. Status >= 400 fails, a non-JSON body fails, a missing `response`
//!    key yields an empty string

use std::sync::Arc;

use serde_json::Value;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::descriptor::InvocationDescriptor;
use crate::error::{PraisonAiError, Result};
use crate::transport::{HttpTransport, ReqwestTransport, TransportResponse};

/// Executes queries against the configured endpoint
///
/// Stateless apart from the shared transport; clone it freely and call it
/// from as many tasks as needed.
#[derive(Clone)]
pub struct Invoker {
    transport: Arc<dyn HttpTransport>,
}

impl Invoker {
    /// Invoker backed by a fresh reqwest client that does not follow redirects
    ///
    /// # Errors
    /// `Configuration` if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(Arc::new(ReqwestTransport::new()?)))
    }

    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Send `query` to the descriptor's endpoint and return the `response` text
    ///
    /// Exactly one request is issued; nothing is retried.
    ///
    /// # Errors
    /// - `Configuration` if the base URL cannot form a request
    /// - `Connection` if the service cannot be reached
    /// - `Timeout` if the round trip exceeds the descriptor timeout
    /// - `UpstreamHttp` for status >= 400
    /// - `MalformedResponse` if the body is not JSON
    pub async fn invoke(&self, query: &str, descriptor: &InvocationDescriptor) -> Result<String> {
        let url = descriptor.endpoint();
        let timeout = descriptor.timeout();
        let body = serde_json::json!({ "query": query });

        tracing::debug!(
            "Dispatching query to {} ({} chars, timeout {}s)",
            url,
            query.len(),
            timeout.as_secs()
        );

        let started = Instant::now();
        let response = match tokio::time::timeout(
            timeout,
            self.transport.post_json(&url, &body, timeout),
        )
        .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(PraisonAiError::Timeout(_))) | Err(_) => {
                tracing::warn!("Request to {} timed out after {}s", url, timeout.as_secs());
                return Err(PraisonAiError::Timeout(timeout));
            }
            Ok(Err(e)) => return Err(e),
        };

        tracing::debug!(
            "Received status {} from {} in {:?}",
            response.status,
            url,
            started.elapsed()
        );

        extract_response(response)
    }

    /// Same as [`Invoker::invoke`], but aborts when `cancel` fires
    ///
    /// The timeout still applies; whichever comes first wins.
    pub async fn invoke_with_cancel(
        &self,
        query: &str,
        descriptor: &InvocationDescriptor,
        cancel: &CancellationToken,
    ) -> Result<String> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Request to {} cancelled by caller", descriptor.endpoint());
                Err(PraisonAiError::Cancelled)
            }
            result = self.invoke(query, descriptor) => result,
        }
    }
}

/// Turn a raw response into the tool result
///
/// A missing or non-string `response` field is not an error: callers rely
/// on getting an empty string back from partial responses.
fn extract_response(response: TransportResponse) -> Result<String> {
    if response.status >= 400 {
        tracing::warn!("Workflow service returned status {}", response.status);
        return Err(PraisonAiError::UpstreamHttp {
            status: response.status,
            body: response.body,
        });
    }

    let value: Value = serde_json::from_str(&response.body)
        .map_err(|e| PraisonAiError::MalformedResponse(e.to_string()))?;

    match value.get("response").and_then(Value::as_str) {
        Some(text) => Ok(text.to_string()),
        None => {
            tracing::debug!("Response has no string 'response' field, returning empty result");
            Ok(String::new())
        }
    }
}
