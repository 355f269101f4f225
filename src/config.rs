use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming a YAML configuration file.
pub const CONFIG_ENV: &str = "INTAKE_CONFIG";

/// How the service is mounted and which defaults fill in missing
/// connection metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of leading path segments owned by the hosting application.
    pub split_point: usize,
    /// Mount prefix of the application (e.g. "/app").
    pub context_path: String,
    /// Listener prefix within the application (e.g. "/odata.svc").
    pub servlet_path: String,
    pub scheme: String,
    /// Used when a request carries no `Host` header.
    pub server_name: String,
    pub server_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            split_point: 0,
            context_path: String::new(),
            servlet_path: String::new(),
            scheme: "http".to_string(),
            server_name: "localhost".to_string(),
            server_port: 8080,
        }
    }
}

impl Config {
    /// Loads the file named by `INTAKE_CONFIG`, or the defaults when unset.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("in config file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Config = serde_yaml::from_str(content).context("invalid config YAML")?;
        tracing::debug!(
            split_point = config.split_point,
            context_path = %config.context_path,
            servlet_path = %config.servlet_path,
            "configuration loaded"
        );
        Ok(config)
    }
}
