// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::lists::model::{List, ListUpdate};
use crate::lists::{ordering, tags};
use crate::util::json_store;

#[derive(Debug)]
pub struct ListStoreError {
    message: String,
}

impl ListStoreError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ListStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ListStoreError {}

/// Whole-snapshot store for the list collection: the full set of documents
/// lives in memory behind an `RwLock` and is rewritten to disk as one atomic
/// JSON file on every mutation. The disk write happens before the in-memory
/// swap, so a failed persist leaves memory and disk consistent with each
/// other.
pub struct ListStore {
    data_file: PathBuf,
    lists: RwLock<Vec<List>>,
}

impl ListStore {
    pub fn open(data_file: PathBuf) -> Result<Self, ListStoreError> {
        let lists = Self::load_from_disk(&data_file)?;
        Ok(Self {
            data_file,
            lists: RwLock::new(lists),
        })
    }

    /// A missing or blank file is the empty collection. Items whose text
    /// carries hashtags not yet reflected in their tag set are healed on the
    /// way in; this covers documents imported from elsewhere and documents
    /// written before tagging existed.
    fn load_from_disk(data_file: &Path) -> Result<Vec<List>, ListStoreError> {
        let raw: Option<Vec<List>> = json_store::read_json_file(data_file, "lists")
            .map_err(|err| ListStoreError::new(err.to_string()))?;
        let mut lists = raw.unwrap_or_default();
        for list in &mut lists {
            let mut healed = false;
            for item in &mut list.items {
                healed |= tags::synchronize(item);
            }
            if healed {
                log::info!(
                    "Healed tags missing from items in list '{}' ({})",
                    list.name,
                    list.id
                );
            }
        }
        Ok(lists)
    }

    pub fn snapshot(&self) -> Result<Vec<List>, ListStoreError> {
        self.lists
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| ListStoreError::new("List store lock poisoned"))
    }

    pub fn get(&self, list_id: &str) -> Result<Option<List>, ListStoreError> {
        let lists = self
            .lists
            .read()
            .map_err(|_| ListStoreError::new("List store lock poisoned"))?;
        Ok(lists.iter().find(|list| list.id == list_id).cloned())
    }

    pub fn insert(&self, list: List) -> Result<(), ListStoreError> {
        let mut lists = self.snapshot()?;
        lists.push(list);
        self.persist(lists)
    }

    /// Merge the given fields onto the stored record, then normalize the
    /// item collection: fold text hashtags into each tag set and
    /// re-establish the dense ordering. Returns the updated document, or
    /// `None` when the id is unknown.
    pub fn update(&self, list_id: &str, update: ListUpdate) -> Result<Option<List>, ListStoreError> {
        let mut lists = self.snapshot()?;
        let Some(list) = lists.iter_mut().find(|list| list.id == list_id) else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            list.name = name;
        }
        if let Some(items) = update.items {
            list.items = items;
        }
        for item in &mut list.items {
            tags::synchronize(item);
        }
        ordering::renumber(list);

        let updated = list.clone();
        self.persist(lists)?;
        Ok(Some(updated))
    }

    /// Remove a document outright. `false` when the id is unknown; nothing
    /// is written in that case.
    pub fn remove(&self, list_id: &str) -> Result<bool, ListStoreError> {
        let mut lists = self.snapshot()?;
        let len_before = lists.len();
        lists.retain(|list| list.id != list_id);
        if lists.len() == len_before {
            return Ok(false);
        }
        self.persist(lists)?;
        Ok(true)
    }

    fn persist(&self, lists: Vec<List>) -> Result<(), ListStoreError> {
        json_store::write_json_file(&self.data_file, "lists", &lists)
            .map_err(|err| ListStoreError::new(err.to_string()))?;
        let mut guard = self
            .lists
            .write()
            .map_err(|_| ListStoreError::new("List store lock poisoned"))?;
        *guard = lists;
        Ok(())
    }
}
