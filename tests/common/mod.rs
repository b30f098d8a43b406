// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use lizt::api;
use lizt::app_state::AppState;
use lizt::assets;
use lizt::config::{AppConfig, LoggingConfig, ServerConfig, ValidatedConfig};
use lizt::lists::ListStore;
use lizt::runtime_paths::RuntimePaths;
use lizt::util::test_fixtures::TestFixtureRoot;
use std::path::PathBuf;
use std::sync::Arc;

pub struct TestHarness {
    pub fixture: TestFixtureRoot,
    pub config: Arc<ValidatedConfig>,
    pub runtime_paths: RuntimePaths,
    pub app_state: Arc<AppState>,
}

#[derive(Clone)]
pub struct AppBundle {
    pub config: Arc<ValidatedConfig>,
    pub app_state: Arc<AppState>,
    pub public_dir: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_prefix("api-test-suite")
    }

    pub fn with_prefix(prefix: &str) -> Self {
        let fixture = TestFixtureRoot::new_unique(prefix).expect("fixture root");
        fixture.init_runtime_layout().expect("fixture layout");

        let config = Arc::new(build_config());
        let runtime_paths = fixture.runtime_paths().expect("runtime paths");
        let list_store = ListStore::open(runtime_paths.data_file.clone()).expect("list store");
        let app_state = Arc::new(AppState::new(list_store, runtime_paths.clone()));

        Self {
            fixture,
            config,
            runtime_paths,
            app_state,
        }
    }

    pub fn app_bundle(&self) -> AppBundle {
        AppBundle {
            config: self.config.clone(),
            app_state: self.app_state.clone(),
            public_dir: self.runtime_paths.public_dir.clone(),
        }
    }

    /// The raw persisted snapshot, parsed.
    pub fn persisted_lists(&self) -> serde_json::Value {
        let content =
            std::fs::read_to_string(&self.runtime_paths.data_file).expect("data file readable");
        serde_json::from_str(&content).expect("data file json")
    }
}

pub fn build_test_app(
    bundle: AppBundle,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let public_dir = bundle.public_dir;

    App::new()
        .app_data(web::Data::from(bundle.config))
        .app_data(web::Data::from(bundle.app_state))
        .configure(api::configure)
        .configure(move |cfg| assets::configure(cfg, &public_dir))
        .default_service(web::route().to(api::default_not_found))
}

fn build_config() -> ValidatedConfig {
    ValidatedConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8081,
            workers: 1,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
        },
        app: AppConfig {
            name: "Test App".to_string(),
            description: "Test Description".to_string(),
        },
    }
}
