// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use regex::Regex;
use std::sync::OnceLock;

use crate::lists::model::Item;

fn hashtag_pattern() -> &'static Regex {
    static HASHTAG: OnceLock<Regex> = OnceLock::new();
    HASHTAG.get_or_init(|| Regex::new(r"#[0-9A-Za-z_]+").expect("hashtag pattern"))
}

/// Collect the hashtags present in `text`: `#` followed by one or more word
/// characters, lowercased, deduplicated, in first-occurrence order. A bare
/// `#` matches nothing.
pub fn extract_tags(text: &str) -> Vec<String> {
    let mut tags = Vec::new();
    for found in hashtag_pattern().find_iter(text) {
        let tag = found.as_str().to_ascii_lowercase();
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Fold the hashtags found in the item's text into its tag set. Additive
/// only: a tag already in the set is never removed here, even when it no
/// longer occurs in the text (detaching is the tag editor's decision).
/// Returns whether the set changed; a second consecutive call is a no-op.
pub fn synchronize(item: &mut Item) -> bool {
    let mut changed = false;
    for tag in extract_tags(&item.text) {
        if !item.tags.contains(&tag) {
            item.tags.push(tag);
            changed = true;
        }
    }
    changed
}

/// Derive the display form of an item: text with hashtag tokens stripped and
/// whitespace collapsed, followed by every tag in the set (detached ones
/// included) as trailing tokens. Recomputed on every call, never cached.
pub fn display_text(item: &Item) -> String {
    let stripped = hashtag_pattern().replace_all(&item.text, "");
    let mut display = collapse_whitespace(&stripped);
    for tag in &item.tags {
        if !display.is_empty() {
            display.push(' ');
        }
        display.push_str(tag);
    }
    display
}

/// Normalize raw tag-editor input into canonical hashtags: keep word
/// characters only, lowercase, prefix with `#`, drop empties, deduplicate.
pub fn normalize_tags(raw: &[String]) -> Vec<String> {
    let mut tags = Vec::new();
    for value in raw {
        let body: String = value
            .trim()
            .trim_start_matches('#')
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
            .collect();
        if body.is_empty() {
            continue;
        }
        let tag = format!("#{}", body.to_ascii_lowercase());
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Remove every literal occurrence of `tag` from `text`, together with one
/// preceding whitespace run, then collapse the remaining whitespace.
pub fn strip_tag_token(text: &str, tag: &str) -> String {
    let body = tag.strip_prefix('#').unwrap_or(tag);
    let pattern =
        Regex::new(&format!(r"(?i)\s*#{}\b", regex::escape(body))).expect("tag strip pattern");
    collapse_whitespace(&pattern.replace_all(text, ""))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
