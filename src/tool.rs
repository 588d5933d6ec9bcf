//! Tool surface exposed to host agent frameworks
//!
//! A host sees every PraisonAI endpoint through the same small contract:
//! a name, a description, a function-calling definition and `call(query)`.
//! The generic workflow tool and the named-agent tools are the same type;
//! the descriptor's `Route` is what tells them apart.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::definition::ToolDefinition;
use crate::descriptor::InvocationDescriptor;
use crate::error::{PraisonAiError, Result};
use crate::invoker::Invoker;

/// Capability contract for a callable tool
///
/// Thread Safety: implementations are shared across tasks behind `Arc`.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool identity (e.g. "praisonai", "praisonai_writer")
    fn name(&self) -> &str;

    /// Human/LLM readable description of when to use the tool
    fn description(&self) -> &str;

    /// Function-calling definition for the tool
    fn definition(&self) -> ToolDefinition;

    /// Run a query and return the textual result
    async fn call(&self, query: &str) -> Result<String>;
}

/// Tool that forwards queries to a PraisonAI workflow server
///
/// Usage:
/// ```rust,ignore
/// let tool = PraisonAiTool::workflow("http://localhost:8080")?;
/// let result = tool.call("Research AI trends").await?;
///
/// let researcher = PraisonAiTool::agent("http://localhost:8080", "researcher")?;
/// let papers = researcher.call("Find latest AI papers").await?;
/// ```
#[derive(Clone)]
pub struct PraisonAiTool {
    descriptor: InvocationDescriptor,
    invoker: Invoker,
}

impl PraisonAiTool {
    /// Tool with its own invoker
    ///
    /// # Errors
    /// `Configuration` if the HTTP client cannot be built.
    pub fn new(descriptor: InvocationDescriptor) -> Result<Self> {
        Ok(Self::with_invoker(descriptor, Invoker::new()?))
    }

    /// Share one invoker (and its connection pool) between tools
    pub fn with_invoker(descriptor: InvocationDescriptor, invoker: Invoker) -> Self {
        Self {
            descriptor,
            invoker,
        }
    }

    /// Generic tool routed to `/agents`
    pub fn workflow(base_url: impl Into<String>) -> Result<Self> {
        Self::new(InvocationDescriptor::workflow(base_url))
    }

    /// Named-agent tool routed to `/agents/{agent_name}`
    ///
    /// # Errors
    /// `Configuration` if `agent_name` is empty.
    pub fn agent(base_url: impl Into<String>, agent_name: impl Into<String>) -> Result<Self> {
        Self::new(InvocationDescriptor::agent(base_url, agent_name)?)
    }

    pub fn descriptor(&self) -> &InvocationDescriptor {
        &self.descriptor
    }

    /// Run a query, giving up early if `cancel` fires
    pub async fn call_with_cancel(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<String> {
        self.invoker
            .invoke_with_cancel(query, &self.descriptor, cancel)
            .await
    }

    /// Synchronous entry point for hosts without an async runtime
    ///
    /// Drives the call on a private current-thread runtime. Calling this from
    /// inside a tokio runtime is rejected instead of panicking.
    pub fn run_blocking(&self, query: &str) -> Result<String> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(PraisonAiError::Configuration(
                "run_blocking cannot be used inside an async runtime, use call() instead"
                    .to_string(),
            ));
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        runtime.block_on(self.call(query))
    }
}

#[async_trait]
impl Tool for PraisonAiTool {
    fn name(&self) -> &str {
        self.descriptor.name()
    }

    fn description(&self) -> &str {
        self.descriptor.description()
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition::from_descriptor(&self.descriptor)
    }

    async fn call(&self, query: &str) -> Result<String> {
        self.invoker.invoke(query, &self.descriptor).await
    }
}
