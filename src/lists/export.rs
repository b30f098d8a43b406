// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::lists::model::{Item, List};

/// Render a list as markdown with a fixed footer date label. Items appear
/// ascending by `order` with their raw text, hashtags included verbatim.
/// Never mutates the list.
pub fn render_markdown(list: &List, date_label: &str) -> String {
    let mut markdown = format!("# {}\n\n", list.name);

    if list.items.is_empty() {
        markdown.push_str("*No items in this list*\n");
    } else {
        let mut items: Vec<&Item> = list.items.iter().collect();
        items.sort_by_key(|item| item.order);
        for item in items {
            let checkbox = if item.completed { "[x]" } else { "[ ]" };
            markdown.push_str(&format!("- {} {}\n", checkbox, item.text));
        }
    }

    markdown.push_str(&format!("\n*Exported from Lizt on {}*\n", date_label));
    markdown
}

/// Render a list as markdown dated today.
pub fn to_markdown(list: &List) -> String {
    let today = chrono::Local::now().format("%-m/%-d/%Y").to_string();
    render_markdown(list, &today)
}

/// Derive the download filename: every non-alphanumeric character becomes
/// `_`, lowercased, with a `.md` suffix.
pub fn export_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}.md", sanitized)
}
