use colored::*;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use mcp_inspect::transport::InspectorCommand;

/// Replaces `server.command` when set (whitespace-separated)
pub const SERVER_ENV: &str = "MCP_INSPECT_SERVER";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub inspector: InspectorConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    pub program: String,
    pub args: Vec<String>,
    pub quiet: bool,
    pub timeout_ms: Option<u64>,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        let command = InspectorCommand::default();
        Self {
            program: command.program,
            args: command.args,
            quiet: command.quiet,
            timeout_ms: command.timeout_ms,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub command: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            command: InspectorCommand::default().server,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            inspector: InspectorConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("{} failed to load config from {}: {:#}", "Warning:".yellow(), primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    eprintln!("{} failed to load config from {}: {:#}", "Warning:".yellow(), fallback_config.display(), e);
                }
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Apply `MCP_INSPECT_SERVER` if it holds a non-empty command
    pub fn with_server_override(mut self, value: Option<String>) -> Self {
        if let Some(value) = value {
            let command: Vec<String> = value.split_whitespace().map(String::from).collect();
            if !command.is_empty() {
                self.server.command = command;
            }
        }
        self
    }

    /// Inspector invocation described by this config
    pub fn inspector_command(&self) -> InspectorCommand {
        InspectorCommand {
            program: self.inspector.program.clone(),
            args: self.inspector.args.clone(),
            quiet: self.inspector.quiet,
            server: self.server.command.clone(),
            timeout_ms: self.inspector.timeout_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert_eq!(config.inspector_command(), InspectorCommand::default());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mcp-inspect.yml");
        fs::write(
            &path,
            r#"
log_level: debug
inspector:
  program: reloaderoo
  args: [inspect]
  quiet: false
  timeout_ms: 5000
server:
  command: [node, build/index.js]
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));

        let command = config.inspector_command();
        assert_eq!(command.program, "reloaderoo");
        assert_eq!(command.args, vec!["inspect"]);
        assert!(!command.quiet);
        assert_eq!(command.timeout_ms, Some(5000));
        assert_eq!(command.server, vec!["node", "build/index.js"]);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.yml");
        fs::write(&path, "server:\n  command: [node, build/index.js]\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.inspector.program, "npx");
        assert!(config.inspector.quiet);
        assert!(config.inspector.timeout_ms.is_none());
        assert_eq!(config.server.command, vec!["node", "build/index.js"]);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yml");
        fs::write(&path, "inspector: [not, a, map").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_server_override() {
        let config = Config::default().with_server_override(Some("node build/index.js".to_string()));
        assert_eq!(config.server.command, vec!["node", "build/index.js"]);

        let untouched = Config::default().with_server_override(Some("   ".to_string()));
        assert_eq!(untouched.server.command, ServerConfig::default().command);

        let none = Config::default().with_server_override(None);
        assert_eq!(none.server.command, ServerConfig::default().command);
    }
}
