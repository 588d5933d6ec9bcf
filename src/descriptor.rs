//! Invocation descriptors
//!
//! An `InvocationDescriptor` is the immutable answer to "where does this
//! query go and how long may it take". It is built once and never mutated:
//! the route (generic workflow vs. named agent) and the derived display
//! metadata are fixed at construction.

use std::time::Duration;

use crate::error::{PraisonAiError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

const WORKFLOW_TOOL_NAME: &str = "praisonai";
const WORKFLOW_TOOL_DESCRIPTION: &str = "A multi-agent AI workflow tool. \
    Useful for complex tasks that benefit from multiple AI agents working together. \
    Input should be a query or task description.";

/// Which endpoint a descriptor talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `POST {base_url}/agents`, the server picks the agent
    Workflow,

    /// `POST {base_url}/agents/{name}`, routing bypassed
    Agent { name: String },
}

/// Immutable configuration identifying how and where to send a query
///
/// Usage:
/// ```
/// use praisonai_tool::InvocationDescriptor;
///
/// let generic = InvocationDescriptor::workflow("http://localhost:8080");
/// assert_eq!(generic.endpoint(), "http://localhost:8080/agents");
///
/// let writer = InvocationDescriptor::agent("http://localhost:8080", "writer").unwrap();
/// assert_eq!(writer.name(), "praisonai_writer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationDescriptor {
    base_url: String,
    route: Route,
    timeout: Duration,
    name: String,
    description: String,
}

impl InvocationDescriptor {
    /// Generic workflow descriptor with the default timeout
    pub fn workflow(base_url: impl Into<String>) -> Self {
        Self::from_parts(base_url.into(), Route::Workflow, DEFAULT_TIMEOUT_SECS)
    }

    /// Named-agent descriptor with the default timeout
    ///
    /// # Errors
    /// `Configuration` if `agent_name` is empty.
    pub fn agent(base_url: impl Into<String>, agent_name: impl Into<String>) -> Result<Self> {
        Self::builder()
            .base_url(base_url)
            .agent_name(agent_name)
            .build()
    }

    pub fn builder() -> DescriptorBuilder {
        DescriptorBuilder::default()
    }

    fn from_parts(base_url: String, route: Route, timeout_secs: u64) -> Self {
        let (name, description) = match &route {
            Route::Workflow => (
                WORKFLOW_TOOL_NAME.to_string(),
                WORKFLOW_TOOL_DESCRIPTION.to_string(),
            ),
            Route::Agent { name } => (agent_tool_name(name), agent_tool_description(name)),
        };

        Self {
            base_url,
            route,
            timeout: Duration::from_secs(timeout_secs),
            name,
            description,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Agent name for the named variant, `None` for the generic one
    pub fn agent_name(&self) -> Option<&str> {
        match &self.route {
            Route::Workflow => None,
            Route::Agent { name } => Some(name),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout.as_secs()
    }

    /// Tool identity shown to the host framework
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Resolve the target URL for this descriptor
    ///
    /// The base URL is used verbatim. The agent name is percent-encoded as a
    /// single path segment so that names containing `/`, `?` or spaces
    /// cannot escape the `/agents/` prefix.
    pub fn endpoint(&self) -> String {
        match &self.route {
            Route::Workflow => format!("{}/agents", self.base_url),
            Route::Agent { name } => {
                format!("{}/agents/{}", self.base_url, urlencoding::encode(name))
            }
        }
    }
}

impl Default for InvocationDescriptor {
    fn default() -> Self {
        Self::workflow(DEFAULT_BASE_URL)
    }
}

fn agent_tool_name(agent_name: &str) -> String {
    format!("praisonai_{}", agent_name)
}

fn agent_tool_description(agent_name: &str) -> String {
    format!(
        "Run a query through the '{}' AI agent. Input should be a query or task description.",
        agent_name
    )
}

/// Builder for `InvocationDescriptor`
///
/// The variant is picked from whether an agent name was supplied. Use
/// `DescriptorBuilder::named()` when the caller requires the named variant,
/// so that a missing name is an error instead of a silent fallback to the
/// generic endpoint.
#[derive(Debug, Default, Clone)]
pub struct DescriptorBuilder {
    base_url: Option<String>,
    agent_name: Option<String>,
    timeout_secs: Option<u64>,
    require_agent: bool,
}

impl DescriptorBuilder {
    /// Builder that must end up with a non-empty agent name
    pub fn named() -> Self {
        Self {
            require_agent: true,
            ..Self::default()
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn agent_name(mut self, agent_name: impl Into<String>) -> Self {
        self.agent_name = Some(agent_name.into());
        self.require_agent = true;
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Build the descriptor
    ///
    /// # Errors
    /// - `Configuration` if the named variant was requested without a
    ///   non-empty agent name
    /// - `Configuration` if the timeout is zero
    pub fn build(self) -> Result<InvocationDescriptor> {
        let timeout_secs = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(PraisonAiError::Configuration(
                "timeout_secs must be a positive number of seconds".to_string(),
            ));
        }

        let route = match self.agent_name {
            Some(name) if !name.is_empty() => Route::Agent { name },
            _ if self.require_agent => {
                return Err(PraisonAiError::Configuration(
                    "agent_name is required for a named-agent tool".to_string(),
                ));
            }
            _ => Route::Workflow,
        };

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(InvocationDescriptor::from_parts(base_url, route, timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_defaults() {
        let descriptor = InvocationDescriptor::default();

        assert_eq!(descriptor.base_url(), "http://localhost:8080");
        assert_eq!(descriptor.timeout_secs(), 300);
        assert_eq!(descriptor.route(), &Route::Workflow);
        assert_eq!(descriptor.agent_name(), None);
        assert_eq!(descriptor.name(), "praisonai");
        assert!(descriptor.description().starts_with("A multi-agent AI workflow tool."));
    }

    #[test]
    fn test_named_agent_metadata() {
        let descriptor = InvocationDescriptor::agent("http://x", "writer").unwrap();

        assert_eq!(descriptor.name(), "praisonai_writer");
        assert!(descriptor.description().contains("writer"));
        assert_eq!(descriptor.agent_name(), Some("writer"));
    }

    #[test]
    fn test_empty_agent_name_rejected() {
        let result = InvocationDescriptor::agent("http://x", "");

        match result {
            Err(PraisonAiError::Configuration(msg)) => assert!(msg.contains("agent_name")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_named_builder_without_agent_rejected() {
        let result = DescriptorBuilder::named().base_url("http://x").build();
        assert!(matches!(result, Err(PraisonAiError::Configuration(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = InvocationDescriptor::builder().timeout_secs(0).build();
        assert!(matches!(result, Err(PraisonAiError::Configuration(_))));
    }

    #[test]
    fn test_builder_picks_variant_from_agent_name() {
        let generic = InvocationDescriptor::builder()
            .base_url("http://x")
            .timeout_secs(10)
            .build()
            .unwrap();
        assert_eq!(generic.route(), &Route::Workflow);
        assert_eq!(generic.timeout(), Duration::from_secs(10));

        let named = InvocationDescriptor::builder()
            .base_url("http://x")
            .agent_name("researcher")
            .build()
            .unwrap();
        assert_eq!(
            named.route(),
            &Route::Agent {
                name: "researcher".to_string()
            }
        );
    }

    #[test]
    fn test_endpoint_resolution() {
        let generic = InvocationDescriptor::workflow("http://x");
        assert_eq!(generic.endpoint(), "http://x/agents");

        let named = InvocationDescriptor::agent("http://x", "researcher").unwrap();
        assert_eq!(named.endpoint(), "http://x/agents/researcher");
    }

    #[test]
    fn test_endpoint_escapes_agent_name() {
        let named = InvocationDescriptor::agent("http://x", "data analyst/v2").unwrap();
        assert_eq!(named.endpoint(), "http://x/agents/data%20analyst%2Fv2");

        // Display metadata keeps the raw name
        assert_eq!(named.name(), "praisonai_data analyst/v2");
    }

    #[test]
    fn test_base_url_used_verbatim() {
        let descriptor = InvocationDescriptor::workflow("http://x/");
        assert_eq!(descriptor.endpoint(), "http://x//agents");
    }
}
