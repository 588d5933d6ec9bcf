// Tool definitions in OpenAI-compatible function calling format
//
// Host frameworks that speak function calling hand these to the LLM, which
// then decides when to call a PraisonAI tool and with which query.
//
// Reference: https://platform.openai.com/docs/guides/function-calling

use serde::{Deserialize, Serialize};

use crate::descriptor::InvocationDescriptor;

/// Tool definition in OpenAI function calling format
///
/// # Example
/// ```json
/// {
///   "type": "function",
///   "function": {
///     "name": "praisonai_researcher",
///     "description": "Run a query through the 'researcher' AI agent. ...",
///     "parameters": {
///       "type": "object",
///       "properties": {
///         "query": {
///           "type": "string",
///           "description": "The query or task description to send"
///         }
///       },
///       "required": ["query"]
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Always "function" for function calling
    #[serde(rename = "type")]
    pub tool_type: String,

    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: FunctionParameters,
}

/// Parameters schema for a function (JSON Schema format)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionParameters {
    /// Always "object" for parameter schemas
    #[serde(rename = "type")]
    pub param_type: String,

    pub properties: serde_json::Value,

    pub required: Vec<String>,
}

impl ToolDefinition {
    /// Build the definition for a descriptor
    ///
    /// Both variants take the same single `query` string; only the name and
    /// description differ.
    pub fn from_descriptor(descriptor: &InvocationDescriptor) -> Self {
        Self {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: descriptor.name().to_string(),
                description: descriptor.description().to_string(),
                parameters: query_parameters(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.function.name
    }
}

fn query_parameters() -> FunctionParameters {
    FunctionParameters {
        param_type: "object".to_string(),
        properties: serde_json::json!({
            "query": {
                "type": "string",
                "description": "The query or task description to send"
            }
        }),
        required: vec!["query".to_string()],
    }
}
