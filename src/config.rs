// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_workers() -> usize {
    2
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> LevelFilter {
        match self.level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => LevelFilter::Info,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_description")]
    pub description: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            description: default_app_description(),
        }
    }
}

fn default_app_name() -> String {
    "Lizt".to_string()
}

fn default_app_description() -> String {
    "A simple list manager with hashtags and markdown export".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub app: AppConfig,
}

#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub app: AppConfig,
}

const KNOWN_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    pub fn load_and_validate(root: &Path) -> Result<ValidatedConfig, ConfigError> {
        let config_path = root.join("config.yaml");
        let content = fs::read_to_string(&config_path).map_err(|err| {
            ConfigError::LoadError(format!(
                "Failed to read {}: {}",
                config_path.display(),
                err
            ))
        })?;
        let config: Config = serde_yaml::from_str(&content).map_err(|err| {
            ConfigError::LoadError(format!(
                "Failed to parse {}: {}",
                config_path.display(),
                err
            ))
        })?;
        config.validate()
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host must not be empty".to_string(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be between 1 and 65535".to_string(),
            ));
        }
        if self.server.workers == 0 {
            return Err(ConfigError::ValidationError(
                "server.workers must be at least 1".to_string(),
            ));
        }
        let level = self.logging.level.to_lowercase();
        if !KNOWN_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}",
                KNOWN_LOG_LEVELS.join(", ")
            )));
        }
        if self.app.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "app.name must not be empty".to_string(),
            ));
        }

        Ok(ValidatedConfig {
            server: self.server,
            logging: self.logging,
            app: self.app,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("server:\n  port: 8080\n").expect("parse");
        let validated = config.validate().expect("validate");
        assert_eq!(validated.server.host, "127.0.0.1");
        assert_eq!(validated.server.port, 8080);
        assert_eq!(validated.server.workers, 2);
        assert_eq!(validated.logging.level, "info");
        assert_eq!(validated.app.name, "Lizt");
    }

    #[test]
    fn zero_port_is_rejected() {
        let config: Config = serde_yaml::from_str("server:\n  port: 0\n").expect("parse");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn zero_workers_is_rejected() {
        let config: Config = serde_yaml::from_str("server:\n  workers: 0\n").expect("parse");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let config: Config = serde_yaml::from_str("logging:\n  level: loud\n").expect("parse");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn level_filter_maps_known_levels() {
        let logging = LoggingConfig {
            level: "Debug".to_string(),
        };
        assert_eq!(logging.level_filter(), LevelFilter::Debug);
        let logging = LoggingConfig {
            level: "warn".to_string(),
        };
        assert_eq!(logging.level_filter(), LevelFilter::Warn);
    }
}
