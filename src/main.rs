// Command-line front end for the PraisonAI tool
// Sends one query to a running PraisonAI server and prints the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use praisonai_tool::{InvocationDescriptor, PraisonAiTool, Tool, ToolsConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "praisonai",
    version,
    about = "Run a query through a PraisonAI multi-agent workflow"
)]
struct Args {
    /// Query or task description to send
    #[arg(required_unless_present = "list_tools")]
    query: Option<String>,

    /// Base URL of the PraisonAI server (overrides PRAISONAI_API_URL)
    #[arg(long)]
    url: Option<String>,

    /// Send the query to this agent instead of the workflow router
    #[arg(long)]
    agent: Option<String>,

    /// Request timeout in seconds (overrides PRAISONAI_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,

    /// Load settings from a JSON config file instead of the environment
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the function-calling definitions of the configured tools and exit
    #[arg(long)]
    list_tools: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // .env.local takes precedence over .env, both optional
    if dotenvy::from_filename(".env.local").is_ok() {
        tracing::debug!("Loaded .env.local");
    }

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ToolsConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ToolsConfig::from_env().context("Failed to read configuration from environment")?,
    };
    if let Some(url) = &args.url {
        config.api_url = url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }

    if args.list_tools {
        let toolkit = config.toolkit(&praisonai_tool::Invoker::new()?)?;
        println!("{}", serde_json::to_string_pretty(&toolkit.definitions())?);
        return Ok(());
    }

    let mut builder = InvocationDescriptor::builder()
        .base_url(config.api_url.clone())
        .timeout_secs(config.timeout_secs);
    if let Some(agent) = &args.agent {
        builder = builder.agent_name(agent.clone());
    }
    let tool = PraisonAiTool::new(builder.build()?)?;

    let query = args.query.unwrap_or_default();
    tracing::info!("Running '{}' against {}", tool.name(), tool.descriptor().endpoint());

    let result = tool.call(&query).await?;
    println!("{}", result);

    Ok(())
}
