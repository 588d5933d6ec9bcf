// Centralized error handling using thiserror for type-safe error management
//
// Design Decision: One error enum for every failure a tool call can surface
//
// Each variant maps to a distinct failure mode of the request/response
// contract so that host frameworks can pattern match instead of parsing
// strings. Nothing is retried or recovered inside the crate; every variant
// travels back to the caller as-is.

use std::time::Duration;
use thiserror::Error;

/// Main error type for PraisonAI tool calls
///
/// Error Handling Strategy:
/// - Configuration errors: raised at construction, before any network I/O
/// - Transport errors: the transport maps reqwest failures into Connection / Timeout
/// - Protocol errors: UpstreamHttp for status >= 400, MalformedResponse for bad JSON
/// - Tool dispatch errors: UnknownTool / InvalidArguments from the executor
#[derive(Debug, Error)]
pub enum PraisonAiError {
    /// Invalid descriptor or configuration value
    ///
    /// Examples: named-agent tool without an agent name, zero timeout,
    /// duplicate agent names in a config file.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The remote service could not be reached (DNS, refused connection, ...)
    #[error("Connection error: {0}")]
    Connection(String),

    /// The round trip exceeded the configured timeout
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The remote service answered with status >= 400
    ///
    /// `body` holds the response text when it could be read, otherwise empty.
    #[error("Upstream HTTP error {status}: {body}")]
    UpstreamHttp { status: u16, body: String },

    /// The response body was not valid JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The caller cancelled the in-flight request
    #[error("Request cancelled")]
    Cancelled,

    /// No tool with this name is registered in the toolkit
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Function-call arguments did not carry a string `query`
    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),

    /// IO operation failed
    ///
    /// Wraps std::io::Error with automatic conversion via #[from].
    /// Covers config file reads and blocking runtime construction.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PraisonAiError {
    /// HTTP status carried by an `UpstreamHttp` error
    pub fn status(&self) -> Option<u16> {
        match self {
            PraisonAiError::UpstreamHttp { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, PraisonAiError::Timeout(_))
    }
}

/// Type alias for Result with PraisonAiError
pub type Result<T> = std::result::Result<T, PraisonAiError>;
