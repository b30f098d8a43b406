// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::{Config, ConfigError, ValidatedConfig};
use crate::runtime_paths::RuntimePaths;
use std::error::Error;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_WORKERS: u16 = 2;

#[derive(Debug)]
pub struct BootstrapResult {
    pub validated_config: ValidatedConfig,
    pub runtime_paths: RuntimePaths,
    pub created_config: bool,
}

#[derive(Debug)]
pub enum BootstrapError {
    Config(ConfigError),
    Io(std::io::Error),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Config(err) => write!(f, "{}", err),
            BootstrapError::Io(err) => write!(f, "Bootstrap I/O error: {}", err),
        }
    }
}

impl Error for BootstrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BootstrapError::Config(err) => Some(err),
            BootstrapError::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for BootstrapError {
    fn from(err: ConfigError) -> Self {
        BootstrapError::Config(err)
    }
}

impl From<std::io::Error> for BootstrapError {
    fn from(err: std::io::Error) -> Self {
        BootstrapError::Io(err)
    }
}

pub fn bootstrap_runtime(root: &Path) -> Result<BootstrapResult, BootstrapError> {
    let root_path = normalize_root(root)?;

    let created_config = ensure_config(&root_path)?;

    let validated_config = Config::load_and_validate(&root_path)?;

    let runtime_paths = RuntimePaths::from_root(&root_path)?;

    Ok(BootstrapResult {
        validated_config,
        runtime_paths,
        created_config,
    })
}

fn ensure_config(root: &Path) -> Result<bool, BootstrapError> {
    let config_path = root.join("config.yaml");

    if config_path.exists() {
        return Ok(false);
    }

    let contents = default_config_yaml();

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&config_path)
    {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => return Err(BootstrapError::Io(err)),
    };

    file.write_all(contents.as_bytes())?;
    file.sync_all()?;

    log_action(format!("created config.yaml (http port {})", DEFAULT_PORT));

    Ok(true)
}

fn normalize_root(root: &Path) -> Result<PathBuf, BootstrapError> {
    let root_path = if root.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        root.to_path_buf()
    };

    if root_path.exists() {
        if !root_path.is_dir() {
            return Err(BootstrapError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Runtime root is not a directory: {}", root_path.display()),
            )));
        }
        return Ok(root_path);
    }

    fs::create_dir_all(&root_path)?;
    log_action(format!(
        "created runtime root directory {}",
        root_path.display()
    ));
    Ok(root_path)
}

fn default_config_yaml() -> String {
    format!(
        "server:\n  host: \"127.0.0.1\"\n  port: {port}\n  workers: {workers}\n\nlogging:\n  level: \"info\"\n\napp:\n  name: \"Lizt\"\n  description: \"A simple list manager with hashtags and markdown export\"\n",
        port = DEFAULT_PORT,
        workers = DEFAULT_WORKERS,
    )
}

pub(crate) fn log_action(message: impl AsRef<str>) {
    eprintln!("[bootstrap] {}", message.as_ref());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_fixtures::TestFixtureRoot;

    #[test]
    fn bootstrap_creates_defaults_when_missing() {
        let fixture = TestFixtureRoot::new_unique("bootstrap-default").unwrap();
        let result = bootstrap_runtime(fixture.path()).expect("bootstrap should succeed");

        assert!(result.created_config);
        assert_eq!(result.validated_config.server.port, 3000);
        assert_eq!(result.validated_config.server.workers, 2);
        assert_eq!(result.validated_config.app.name, "Lizt");
        assert!(result.runtime_paths.config_file.exists());
        assert!(result.runtime_paths.data_dir.is_dir());
    }

    #[test]
    fn bootstrap_keeps_existing_config() {
        let fixture = TestFixtureRoot::new_unique("bootstrap-existing").unwrap();
        fs::write(
            fixture.path().join("config.yaml"),
            "server:\n  port: 4100\n",
        )
        .unwrap();

        let result = bootstrap_runtime(fixture.path()).expect("bootstrap should succeed");
        assert!(!result.created_config);
        assert_eq!(result.validated_config.server.port, 4100);
    }

    #[test]
    fn bootstrap_rejects_invalid_config() {
        let fixture = TestFixtureRoot::new_unique("bootstrap-invalid").unwrap();
        fs::write(fixture.path().join("config.yaml"), "server:\n  port: 0\n").unwrap();

        assert!(bootstrap_runtime(fixture.path()).is_err());
    }

    #[test]
    fn default_config_parses_and_validates() {
        let config: Config = serde_yaml::from_str(&default_config_yaml()).expect("parse");
        let validated = config.validate().expect("validate");
        assert_eq!(validated.server.port, DEFAULT_PORT);
    }
}
