// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/config.rs
// Version: 1.0.0
//
// This file defines the application configuration: page title, the author and
// repository links shown in the footer, and the default color theme. It is
// read from an optional JSON file; any field left out keeps its default.
//
// Tree Location:
// - src/config.rs (application configuration)
// - Depends on: serde, serde_json, tokio, error

use crate::error::ConfigError;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

const LOG_TARGET: &str = "asic_roi::config";

/// Page color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme, used by the footer toggle
    pub const fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parse a `?theme=` value; unknown values yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// A footer link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
    pub description: String,
    pub author: Link,
    pub github: Link,
    pub default_theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "ASIC ROI Calculator".to_string(),
            description: "ASIC miner return-on-investment calculator".to_string(),
            author: Link {
                name: "asic-roi contributors".to_string(),
                url: "https://github.com/asic-roi".to_string(),
            },
            github: Link {
                name: "GitHub".to_string(),
                url: "https://github.com/asic-roi/asic-roi".to_string(),
            },
            default_theme: Theme::Light,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        let config: AppConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        info!(target: LOG_TARGET, "📄 Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path).await,
            None => Ok(Self::default()),
        }
    }
}

// Changelog:
// - v1.0.0 (2026-10-18): AppConfig with JSON loading and Theme.
