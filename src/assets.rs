// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_files::Files;
use actix_web::web;
use std::path::Path;

/// Serve the browser client from the runtime `public/` directory. Registered
/// after the API routes so `/api/...` always wins; `/` resolves to
/// `index.html`.
pub fn configure(cfg: &mut web::ServiceConfig, public_dir: &Path) {
    cfg.service(Files::new("/", public_dir).index_file("index.html"));
}
