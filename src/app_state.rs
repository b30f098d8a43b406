// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::lists::ListStore;
use crate::runtime_paths::RuntimePaths;

pub struct AppState {
    pub list_store: ListStore,
    pub runtime_paths: RuntimePaths,
}

impl AppState {
    pub fn new(list_store: ListStore, runtime_paths: RuntimePaths) -> Self {
        Self {
            list_store,
            runtime_paths,
        }
    }
}
