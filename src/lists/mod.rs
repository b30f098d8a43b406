// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod editor;
pub mod export;
pub mod filter;
pub mod model;
pub mod ordering;
pub mod store;
pub mod tags;

pub use model::{Item, List, ListUpdate};
pub use store::{ListStore, ListStoreError};
