// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Item-level state transitions. These are the only paths that mutate an
//! item's `{text, tags}` pair besides `tags::synchronize`; callers persist
//! the whole document afterwards.

use crate::lists::model::{Item, List};
use crate::lists::{ordering, tags};

/// Create an item from raw input and append it to the sequence. Blank input
/// is a silent no-op. Returns the new item's id.
pub fn add_item(list: &mut List, raw_text: &str) -> Option<String> {
    let text = raw_text.trim();
    if text.is_empty() {
        return None;
    }
    let item = Item::new(text);
    let item_id = item.id.clone();
    ordering::append(list, item);
    Some(item_id)
}

/// Replace an item's text. Blank or unchanged input is a silent no-op.
/// A full edit replaces the tag set with exactly the hashtags present in
/// the new text, discarding detached tags (unlike `tags::synchronize`).
pub fn edit_text(item: &mut Item, new_text: &str) -> bool {
    let trimmed = new_text.trim();
    if trimmed.is_empty() || trimmed == item.text {
        return false;
    }
    item.text = trimmed.to_string();
    item.tags = tags::extract_tags(trimmed);
    true
}

/// Flip the completion flag, returning the new value.
pub fn toggle_completed(item: &mut Item) -> bool {
    item.completed = !item.completed;
    item.completed
}

/// Remove an item and renumber the remaining sequence. `false` when the id
/// is unknown.
pub fn delete_item(list: &mut List, item_id: &str) -> bool {
    ordering::remove(list, item_id)
}

/// Apply a tag-editor save. The new set replaces the item's tags; for every
/// tag the user detached that occurred literally in the text, its hashtag
/// token is stripped from the text as well. Detached tags with no textual
/// occurrence leave the text untouched. This is the one path where removing
/// a tag mutates the source text.
pub fn set_tags_from_editor(item: &mut Item, new_tags: &[String]) {
    let normalized = tags::normalize_tags(new_tags);
    for tag in tags::extract_tags(&item.text) {
        if !normalized.contains(&tag) {
            item.text = tags::strip_tag_token(&item.text, &tag);
        }
    }
    item.tags = normalized;
}
