// SPDX-License-Identifier: EUPL-1.2
// Copyright (c) 2026 Benjamin Küttner <benjamin.kuettner@icloud.com>
// Patent Pending — DE Gebrauchsmuster, filed 2026-02-23

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding `assistant.api_key`.
pub const API_KEY_ENV: &str = "NETVISION_API_KEY";

/// Top-level configuration, loaded from `config.toml`.
///
/// Roles, features and the access matrix are compiled in and are
/// intentionally absent here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub dashboard: DashboardConfig,
    pub assistant: AssistantConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8787,
            request_timeout_secs: crate::gateway::REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Sidebar state at the start of every session.
    pub sidebar_open: bool,
    /// Period of the live status clock.
    pub status_tick_millis: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            status_tick_millis: 1000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// `"anthropic"` or `"mock"`.
    pub provider: String,
    pub model: String,
    pub max_tokens: u32,
    pub endpoint: String,
    pub api_key: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            provider: "anthropic".into(),
            model: "claude-sonnet-4-20250514".into(),
            max_tokens: 1000,
            endpoint: "https://api.anthropic.com/v1/messages".into(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `trace`, `debug`, `info`, `warn` or `error`.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Config {
    /// Platform config location, e.g. `~/.config/netvision/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "netvision", "netvision")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Parse a config file. Missing sections fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Load from `path`, or the platform default when `None`. A missing
    /// default file yields the built-in defaults; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            let key = key.trim();
            if !key.is_empty() {
                self.assistant.api_key = Some(key.to_owned());
            }
        }
    }
}
