// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::lists::model::{Item, List};

/// The items visible under the active filter tags, in canonical order.
/// An empty filter shows everything; otherwise an item must carry every
/// active tag (AND semantics), so untagged items disappear as soon as any
/// filter is active.
pub fn visible_items<'a>(list: &'a List, active: &[String]) -> Vec<&'a Item> {
    let mut items: Vec<&Item> = list.items.iter().collect();
    items.sort_by_key(|item| item.order);
    if active.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| active.iter().all(|tag| item.tags.contains(tag)))
        .collect()
}

/// The union of every item's tags, deduplicated and lexicographically
/// sorted. Feeds the filter bar and tag-suggestion UIs.
pub fn available_tags(list: &List) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for item in &list.items {
        for tag in &item.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags.sort();
    tags
}
