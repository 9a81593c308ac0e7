//! Configuration management for Kensa CLI
//!
//! Stores server URL and engine defaults in ~/.config/kensa/config.toml

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "kensa";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_rules")]
    pub default_rules: Vec<String>,
    /// Send `validate` to the server instead of running in-process
    #[serde(default)]
    pub remote: bool,
}

fn default_server_url() -> String {
    "http://127.0.0.1:5001".to_string()
}

fn default_model() -> String {
    kensa::DEFAULT_TARGET_MODEL.to_string()
}

fn default_rules() -> Vec<String> {
    vec![kensa::RuleName::AutoOptimize.to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            default_model: default_model(),
            default_rules: default_rules(),
            remote: false,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Update one setting by its file key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "server_url" => self.server_url = value.trim_end_matches('/').to_string(),
            "default_model" => self.default_model = value.to_string(),
            "default_rules" => {
                let rules = value
                    .split(',')
                    .map(str::trim)
                    .filter(|rule| !rule.is_empty())
                    .map(|rule| {
                        rule.parse::<kensa::RuleName>()
                            .map(|rule| rule.to_string())
                            .map_err(anyhow::Error::msg)
                    })
                    .collect::<Result<Vec<_>>>()?;
                self.default_rules = rules;
            }
            "remote" => {
                self.remote = value
                    .parse()
                    .with_context(|| format!("remote must be true or false, got '{}'", value))?
            }
            _ => bail!(
                "Unknown config key '{}'. Valid: server_url, default_model, default_rules, remote",
                key
            ),
        }
        Ok(())
    }
}
