// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const MAX_TEMP_ATTEMPTS: u32 = 100;

#[derive(Debug)]
pub struct JsonStoreError {
    message: String,
}

impl JsonStoreError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for JsonStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for JsonStoreError {}

/// Read a JSON document, returning `None` when the file is missing or blank.
pub(crate) fn read_json_file<T: DeserializeOwned>(
    path: &Path,
    label: &str,
) -> Result<Option<T>, JsonStoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|err| JsonStoreError::new(format!("Failed to read {} file: {}", label, err)))?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    let decoded = serde_json::from_str(&content)
        .map_err(|err| JsonStoreError::new(format!("Failed to parse {} file: {}", label, err)))?;
    Ok(Some(decoded))
}

/// Replace a JSON document atomically: write to a unique temp file in the
/// same directory, fsync, rename over the target, then sync the directory.
pub(crate) fn write_json_file<T: Serialize>(
    path: &Path,
    label: &str,
    value: &T,
) -> Result<(), JsonStoreError> {
    let content = serde_json::to_string_pretty(value)
        .map_err(|err| JsonStoreError::new(format!("Failed to serialize {}: {}", label, err)))?;
    let parent = path.parent().ok_or_else(|| {
        JsonStoreError::new(format!("{} file path has no parent directory", label))
    })?;
    let file_name = path
        .file_name()
        .ok_or_else(|| JsonStoreError::new(format!("{} file path has no file name", label)))?;
    let (mut file, temp_path) = create_temp_file(parent, file_name, label)?;

    if let Err(err) = file.write_all(content.as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(JsonStoreError::new(format!(
            "Failed to write {} temp file: {}",
            label, err
        )));
    }
    if let Err(err) = file.sync_all() {
        let _ = fs::remove_file(&temp_path);
        return Err(JsonStoreError::new(format!(
            "Failed to sync {} temp file: {}",
            label, err
        )));
    }

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(JsonStoreError::new(format!(
            "Failed to replace {} file: {}",
            label, err
        )));
    }

    #[cfg(unix)]
    {
        if let Err(err) = sync_parent_dir(parent) {
            log::warn!("{} directory sync failed: {}", label, err);
        }
    }

    Ok(())
}

fn create_temp_file(
    parent: &Path,
    file_name: &std::ffi::OsStr,
    label: &str,
) -> Result<(fs::File, PathBuf), JsonStoreError> {
    let file_name = file_name
        .to_str()
        .ok_or_else(|| JsonStoreError::new(format!("{} file name is not valid UTF-8", label)))?;
    for attempt in 0..MAX_TEMP_ATTEMPTS {
        let temp_name = format!(".{}.tmp.{}.{}", file_name, std::process::id(), attempt);
        let temp_path = parent.join(temp_name);
        let file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path);
        match file {
            Ok(file) => return Ok((file, temp_path)),
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(err) => {
                return Err(JsonStoreError::new(format!(
                    "Failed to create temp {} file: {}",
                    label, err
                )));
            }
        }
    }
    Err(JsonStoreError::new(format!(
        "Failed to create temp {} file after multiple attempts",
        label
    )))
}

#[cfg(unix)]
fn sync_parent_dir(parent: &Path) -> Result<(), std::io::Error> {
    let dir = fs::File::open(parent)?;
    dir.sync_all()
}
