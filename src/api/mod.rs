// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::{HttpResponse, web};

pub mod lists;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/lists")
            .route("", web::get().to(lists::get_lists))
            .route("", web::post().to(lists::create_list))
            .route("/{id}", web::get().to(lists::get_list))
            .route("/{id}", web::put().to(lists::update_list))
            .route("/{id}", web::delete().to(lists::delete_list))
            .route("/{id}/export", web::get().to(lists::export_list)),
    );
}

pub async fn default_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Not found" }))
}
