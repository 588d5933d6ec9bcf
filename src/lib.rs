// Library interface for the PraisonAI tool
// Forwards natural-language queries to a running PraisonAI multi-agent
// workflow server and hands the text result back to the host framework.

pub mod config;
pub mod definition;
pub mod descriptor;
pub mod error;
pub mod invoker;
pub mod tool;
pub mod tool_executor;
pub mod transport;

// Re-export commonly used types for convenience
pub use config::ToolsConfig;
pub use definition::ToolDefinition;
pub use descriptor::{DescriptorBuilder, InvocationDescriptor, Route};
pub use error::{PraisonAiError, Result};
pub use invoker::Invoker;
pub use tool::{PraisonAiTool, Tool};
pub use tool_executor::{ToolExecutor, Toolkit};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};
