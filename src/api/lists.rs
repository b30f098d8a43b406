// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::lists::model::{List, ListUpdate};
use crate::lists::{export, store::ListStoreError};

#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    pub name: String,
}

fn json_error(message: &str, status: StatusCode) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({ "error": message }))
}

fn list_not_found() -> HttpResponse {
    json_error("List not found", StatusCode::NOT_FOUND)
}

fn store_failure(action: &str, err: &ListStoreError) -> HttpResponse {
    log::error!("Failed to {} list: {}", action, err);
    json_error(
        &format!("Failed to {} list", action),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}

pub async fn get_lists(app_state: web::Data<AppState>) -> HttpResponse {
    match app_state.list_store.snapshot() {
        Ok(lists) => HttpResponse::Ok().json(lists),
        Err(err) => store_failure("load", &err),
    }
}

pub async fn create_list(
    payload: web::Json<CreateListRequest>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let list = List::new(payload.into_inner().name);
    match app_state.list_store.insert(list.clone()) {
        Ok(()) => {
            log::debug!("Created list '{}' ({})", list.name, list.id);
            HttpResponse::Ok().json(list)
        }
        Err(err) => store_failure("create", &err),
    }
}

pub async fn get_list(path: web::Path<String>, app_state: web::Data<AppState>) -> HttpResponse {
    let list_id = path.into_inner();
    match app_state.list_store.get(&list_id) {
        Ok(Some(list)) => HttpResponse::Ok().json(list),
        Ok(None) => list_not_found(),
        Err(err) => store_failure("load", &err),
    }
}

pub async fn update_list(
    path: web::Path<String>,
    payload: web::Json<ListUpdate>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let list_id = path.into_inner();
    match app_state.list_store.update(&list_id, payload.into_inner()) {
        Ok(Some(list)) => HttpResponse::Ok().json(list),
        Ok(None) => list_not_found(),
        Err(err) => store_failure("update", &err),
    }
}

pub async fn delete_list(path: web::Path<String>, app_state: web::Data<AppState>) -> HttpResponse {
    let list_id = path.into_inner();
    match app_state.list_store.remove(&list_id) {
        Ok(true) => {
            log::debug!("Deleted list {}", list_id);
            HttpResponse::Ok().json(serde_json::json!({ "success": true }))
        }
        Ok(false) => list_not_found(),
        Err(err) => store_failure("delete", &err),
    }
}

pub async fn export_list(path: web::Path<String>, app_state: web::Data<AppState>) -> HttpResponse {
    let list_id = path.into_inner();
    match app_state.list_store.get(&list_id) {
        Ok(Some(list)) => {
            let markdown = export::to_markdown(&list);
            let filename = export::export_filename(&list.name);
            HttpResponse::Ok()
                .content_type("text/markdown")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", filename),
                ))
                .body(markdown)
        }
        Ok(None) => list_not_found(),
        Err(err) => store_failure("export", &err),
    }
}
