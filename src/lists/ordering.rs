// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::lists::model::{Item, List};

/// Re-establish the dense ordering invariant: items sorted ascending by
/// `order`, then assigned `order = index`, 0-based and contiguous. The sort
/// is stable, so ties keep their stored sequence before being renumbered.
pub fn renumber(list: &mut List) {
    list.items.sort_by_key(|item| item.order);
    for (index, item) in list.items.iter_mut().enumerate() {
        item.order = index as i64;
    }
}

/// Append an item at the end of the sequence, `order = length before append`.
pub fn append(list: &mut List, mut item: Item) {
    item.order = list.items.len() as i64;
    list.items.push(item);
}

/// Remove the item with the given id and close the gap it leaves. Returns
/// `false` (no renumbering) when the id is unknown.
pub fn remove(list: &mut List, item_id: &str) -> bool {
    let len_before = list.items.len();
    list.items.retain(|item| item.id != item_id);
    if list.items.len() == len_before {
        return false;
    }
    renumber(list);
    true
}

/// Move the dragged item to just before the item it was dropped on. No-op
/// when the two ids are equal or either is unknown.
pub fn move_relative_to(list: &mut List, dragged_id: &str, target_id: &str) -> bool {
    if dragged_id == target_id {
        return false;
    }
    list.items.sort_by_key(|item| item.order);
    let Some(dragged_index) = index_of(list, dragged_id) else {
        return false;
    };
    let Some(target_index) = index_of(list, target_id) else {
        return false;
    };
    move_from_to(list, dragged_index, target_index)
}

/// Move the dragged item to a target position measured before its removal.
/// No-op when the id is unknown or the adjusted position equals the current
/// one.
pub fn move_to_index(list: &mut List, dragged_id: &str, target_index: usize) -> bool {
    list.items.sort_by_key(|item| item.order);
    let Some(dragged_index) = index_of(list, dragged_id) else {
        return false;
    };
    let target_index = target_index.min(list.items.len().saturating_sub(1));
    move_from_to(list, dragged_index, target_index)
}

fn index_of(list: &List, item_id: &str) -> Option<usize> {
    list.items.iter().position(|item| item.id == item_id)
}

fn move_from_to(list: &mut List, dragged_index: usize, target_index: usize) -> bool {
    // The target was measured with the dragged item still in place; once it
    // is taken out, positions after it shift down by one.
    let adjusted_index = if dragged_index < target_index {
        target_index - 1
    } else {
        target_index
    };
    if adjusted_index == dragged_index {
        return false;
    }
    let item = list.items.remove(dragged_index);
    list.items.insert(adjusted_index, item);
    renumber(list);
    true
}
