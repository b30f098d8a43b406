// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::runtime_paths::RuntimePaths;

#[derive(Debug)]
pub struct TestFixtureRoot {
    path: PathBuf,
}

impl TestFixtureRoot {
    pub fn new_fixed(name: &str) -> std::io::Result<Self> {
        let root = fixtures_root().join(name);
        if root.exists() {
            fs::remove_dir_all(&root)?;
        }
        fs::create_dir_all(&root)?;
        Ok(Self { path: root })
    }

    pub fn new_unique(prefix: &str) -> std::io::Result<Self> {
        let name = format!("{}-{}", prefix, Uuid::new_v4());
        Self::new_fixed(&name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data_dir(&self) -> PathBuf {
        self.path.join("data")
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir().join("lists.json")
    }

    pub fn public_dir(&self) -> PathBuf {
        self.path.join("public")
    }

    pub fn init_runtime_layout(&self) -> std::io::Result<()> {
        fs::create_dir_all(self.data_dir())?;
        fs::create_dir_all(self.public_dir())?;
        Ok(())
    }

    pub fn runtime_paths(&self) -> std::io::Result<RuntimePaths> {
        self.init_runtime_layout()?;
        let root = self.path.canonicalize()?;
        let data_dir = self.data_dir().canonicalize()?;
        let public_dir = self.public_dir().canonicalize()?;

        Ok(RuntimePaths {
            root,
            config_file: self.path.join("config.yaml"),
            data_file: data_dir.join("lists.json"),
            data_dir,
            public_dir,
            logs_dir: self.path.join("logs"),
        })
    }
}

impl Drop for TestFixtureRoot {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn fixtures_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.join("target").join("test-fixtures")
}
