// Tool execution abstraction for host framework delegation
// Lets an LLM function call reach the right PraisonAI tool by name

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::definition::ToolDefinition;
use crate::error::{PraisonAiError, Result};
use crate::tool::Tool;

/// Trait for executing tool calls coming from an LLM
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool call and return the result as a string
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool to call (e.g., "praisonai_researcher")
    /// * `arguments` - JSON arguments for the tool call, `{"query": "..."}`
    async fn execute_tool(&self, tool_name: &str, arguments: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct QueryArguments {
    query: String,
}

/// Name-indexed set of tools, in registration order
#[derive(Clone, Default)]
pub struct Toolkit {
    tools: Vec<Arc<dyn Tool>>,
}

impl Toolkit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool
    ///
    /// # Errors
    /// `Configuration` if a tool with the same name is already registered.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<()> {
        if self.get(tool.name()).is_some() {
            return Err(PraisonAiError::Configuration(format!(
                "Duplicate tool name: {}",
                tool.name()
            )));
        }

        tracing::debug!("Registered tool '{}'", tool.name());
        self.tools.push(tool);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name().to_string()).collect()
    }

    /// Function-calling definitions for every registered tool
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[async_trait]
impl ToolExecutor for Toolkit {
    async fn execute_tool(&self, tool_name: &str, arguments: &str) -> Result<String> {
        let tool = self
            .get(tool_name)
            .ok_or_else(|| PraisonAiError::UnknownTool(tool_name.to_string()))?;

        let args: QueryArguments = serde_json::from_str(arguments)
            .map_err(|e| PraisonAiError::InvalidArguments(e.to_string()))?;

        tracing::info!("Executing tool '{}'", tool_name);
        tool.call(&args.query).await
    }
}
