// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::lists::tags;

/// A named, ordered collection of items. The wire format matches the
/// persisted snapshot: camelCase keys, `createdAt` as an RFC 3339 timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
    pub created_at: DateTime<Utc>,
}

impl List {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// One entry in a list. `tags` holds normalized hashtags (lowercase,
/// `#`-prefixed) as a deduplicated array in first-occurrence order; it
/// defaults to empty so documents written before tagging existed still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let tags = tags::extract_tags(&text);
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            completed: false,
            order: 0,
            tags,
        }
    }
}

/// Partial list document accepted by the update endpoint. Fields the body
/// omits keep their stored values; the id and creation timestamp are never
/// overwritten.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUpdate {
    pub name: Option<String>,
    pub items: Option<Vec<Item>>,
}
