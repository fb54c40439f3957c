//! Configuration management for Formica CLI.

use anyhow::{Context, Result};
use formica::prelude::{ColonyConfig, GraphSpec};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "formica.toml";

/// Formica project configuration.
///
/// Every section and field is optional; missing values take the
/// library defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub colony: ColonyConfig,
    #[serde(default)]
    pub graph: GraphSpec,
}

impl Config {
    /// Load config from formica.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find formica.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_takes_defaults() {
        let config: Config = toml::from_str(
            r#"
            [colony]
            alpha = 1.5
            seed = 12

            [graph]
            nodes = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.colony.alpha, 1.5);
        assert_eq!(config.colony.seed, Some(12));
        assert_eq!(config.colony.beta, 2.0);
        assert_eq!(config.graph.nodes, 30);
        assert_eq!(config.graph.connectivity, 0.35);
    }

    #[test]
    fn empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut config = Config::default();
        config.colony.rounds = 7;
        config.save(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }
}
