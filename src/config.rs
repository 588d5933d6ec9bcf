// Tool configuration
//
// Design Decision: Environment variables with an optional JSON file
//
// Settings come either from the environment (.env file via dotenvy) or from
// a JSON file. Both produce the same `ToolsConfig`, which is validated once
// and then turned into descriptors and a toolkit.
//
// Environment Variables:
// - PRAISONAI_API_URL (optional): base URL, defaults to http://localhost:8080
// - PRAISONAI_TIMEOUT_SECS (optional): positive timeout, defaults to 300
// - PRAISONAI_AGENTS (optional): comma-separated agent names to expose

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::descriptor::{InvocationDescriptor, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{PraisonAiError, Result};
use crate::invoker::Invoker;
use crate::tool::PraisonAiTool;
use crate::tool_executor::Toolkit;

pub const ENV_API_URL: &str = "PRAISONAI_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "PRAISONAI_TIMEOUT_SECS";
pub const ENV_AGENTS: &str = "PRAISONAI_AGENTS";

/// Settings for the set of PraisonAI tools a host exposes
///
/// File Format: JSON, every field optional
///
/// Example:
/// ```json
/// {
///   "api_url": "http://localhost:8080",
///   "timeout_secs": 120,
///   "agents": ["researcher", "writer"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Agents exposed as named tools next to the generic workflow tool
    #[serde(default)]
    pub agents: Vec<String>,
}

fn default_api_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            agents: Vec::new(),
        }
    }
}

impl ToolsConfig {
    /// Load configuration from the environment
    ///
    /// Loads a .env file first if one exists (ignored if not found).
    ///
    /// # Errors
    /// - `Configuration` if PRAISONAI_TIMEOUT_SECS is not a positive integer
    /// - `Configuration` if PRAISONAI_AGENTS contains duplicates
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (environment, map, ...)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(ENV_API_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_api_url);

        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                PraisonAiError::Configuration(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?,
            None => default_timeout_secs(),
        };

        let agents = lookup(ENV_AGENTS)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let config = Self {
            api_url,
            timeout_secs,
            agents,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    ///
    /// # Errors
    /// - `Io` if the file cannot be read
    /// - `Configuration` if the JSON is invalid or fails validation
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            PraisonAiError::Configuration(format!(
                "Invalid config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        tracing::debug!(
            "Loaded tool config from {} ({} agents)",
            path.display(),
            config.agents.len()
        );
        Ok(config)
    }

    /// Save configuration to a JSON file (pretty-printed)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            PraisonAiError::Configuration(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Validate configuration
    ///
    /// Validation Rules:
    /// 1. Timeout is positive
    /// 2. No empty agent names
    /// 3. No duplicate agent names
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(PraisonAiError::Configuration(
                "timeout_secs must be a positive number of seconds".to_string(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for agent in &self.agents {
            if agent.is_empty() {
                return Err(PraisonAiError::Configuration(
                    "Agent name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(agent) {
                return Err(PraisonAiError::Configuration(format!(
                    "Duplicate agent name: {}",
                    agent
                )));
            }
        }

        Ok(())
    }

    /// Descriptors for the generic tool followed by one per configured agent
    pub fn descriptors(&self) -> Result<Vec<InvocationDescriptor>> {
        let generic = InvocationDescriptor::builder()
            .base_url(self.api_url.clone())
            .timeout_secs(self.timeout_secs)
            .build()?;

        let mut descriptors = vec![generic];
        for agent in &self.agents {
            descriptors.push(
                InvocationDescriptor::builder()
                    .base_url(self.api_url.clone())
                    .agent_name(agent.clone())
                    .timeout_secs(self.timeout_secs)
                    .build()?,
            );
        }

        Ok(descriptors)
    }

    /// Toolkit holding every configured tool, all sharing `invoker`
    pub fn toolkit(&self, invoker: &Invoker) -> Result<Toolkit> {
        let mut toolkit = Toolkit::new();
        for descriptor in self.descriptors()? {
            toolkit.register(Arc::new(PraisonAiTool::with_invoker(
                descriptor,
                invoker.clone(),
            )))?;
        }
        Ok(toolkit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // Serialize env tests to avoid env var conflicts
    static CONFIG_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ToolsConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ToolsConfig::default());
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 300);
        assert!(config.agents.is_empty());
    }

    #[test]
    fn test_custom_values() {
        let config = ToolsConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "http://praison:9000"),
            (ENV_TIMEOUT_SECS, " 45 "),
            (ENV_AGENTS, "researcher, writer,,"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://praison:9000");
        assert_eq!(config.timeout_secs, 45);
        assert_eq!(config.agents, vec!["researcher", "writer"]);
    }

    #[test]
    fn test_invalid_timeout() {
        for raw in ["abc", "-5", "0"] {
            let result = ToolsConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, raw)]));
            assert!(
                matches!(result, Err(PraisonAiError::Configuration(_))),
                "expected error for timeout '{raw}'"
            );
        }
    }

    #[test]
    fn test_duplicate_agent_validation() {
        let result = ToolsConfig::from_lookup(lookup_from(&[(ENV_AGENTS, "writer,writer")]));

        match result {
            Err(PraisonAiError::Configuration(msg)) => assert!(msg.contains("writer")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_agent_name_in_file_rejected() {
        let config = ToolsConfig {
            agents: vec![String::new()],
            ..ToolsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PraisonAiError::Configuration(_))
        ));
    }

    #[test]
    fn test_file_round_trip_and_partial_file() {
        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("praisonai.json");
        let config = ToolsConfig {
            api_url: "http://x".to_string(),
            timeout_secs: 60,
            agents: vec!["researcher".to_string()],
        };
        config.save_to_file(&path).unwrap();
        assert_eq!(ToolsConfig::load_from_file(&path).unwrap(), config);

        let partial = dir.path().join("partial.json");
        std::fs::write(&partial, r#"{"agents": ["writer"]}"#).unwrap();
        let loaded = ToolsConfig::load_from_file(&partial).unwrap();
        assert_eq!(loaded.api_url, "http://localhost:8080");
        assert_eq!(loaded.timeout_secs, 300);
        assert_eq!(loaded.agents, vec!["writer"]);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        assert!(matches!(
            ToolsConfig::load_from_file(&path),
            Err(PraisonAiError::Configuration(_))
        ));
        assert!(matches!(
            ToolsConfig::load_from_file(&dir.path().join("missing.json")),
            Err(PraisonAiError::Io(_))
        ));
    }

    #[test]
    fn test_descriptors_and_toolkit() {
        let config = ToolsConfig {
            api_url: "http://x".to_string(),
            timeout_secs: 30,
            agents: vec!["researcher".to_string(), "writer".to_string()],
        };

        let descriptors = config.descriptors().unwrap();
        assert_eq!(descriptors.len(), 3);
        assert_eq!(descriptors[0].endpoint(), "http://x/agents");
        assert_eq!(descriptors[2].endpoint(), "http://x/agents/writer");
        assert!(descriptors.iter().all(|d| d.timeout_secs() == 30));

        let toolkit = config.toolkit(&Invoker::new().unwrap()).unwrap();
        assert_eq!(
            toolkit.names(),
            vec!["praisonai", "praisonai_researcher", "praisonai_writer"]
        );
    }

    #[test]
    fn test_from_env() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();

        std::env::set_var(ENV_API_URL, "http://env-host:8080");
        std::env::set_var(ENV_AGENTS, "analyst");
        std::env::remove_var(ENV_TIMEOUT_SECS);

        let config = ToolsConfig::from_env().unwrap();
        assert_eq!(config.api_url, "http://env-host:8080");
        assert_eq!(config.agents, vec!["analyst"]);

        // Cleanup
        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_AGENTS);
    }
}
