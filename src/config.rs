//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::backend::DEFAULT_SUBMIT_DELAY;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Stub backend latency in milliseconds
    pub submit_delay_ms: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "invoice", "invoice-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Delay the stub backend waits before resolving
    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMIT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.submit_delay_ms.is_none());
        assert_eq!(config.submit_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_explicit_delay() {
        let config = TuiConfig {
            submit_delay_ms: Some(5),
        };
        assert_eq!(config.submit_delay(), Duration::from_millis(5));
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = TuiConfig {
            submit_delay_ms: Some(250),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: TuiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.submit_delay_ms, Some(250));
    }
}
