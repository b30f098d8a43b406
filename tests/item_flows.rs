// This file is part of the product Lizt.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! The browser client edits items locally and re-sends the whole document.
//! These tests replay that read-modify-PUT cycle with the same transition
//! functions the client behavior is specified against.

mod common;

use actix_web::{http::StatusCode, test};
use lizt::lists::{List, editor, filter, ordering};
use serde_json::json;

macro_rules! create_list {
    ($app:expr, $name:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/lists")
            .set_json(json!({ "name": $name }))
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        serde_json::from_slice::<List>(&body).expect("list document")
    }};
}

macro_rules! put_list {
    ($app:expr, $doc:expr) => {{
        let req = test::TestRequest::put()
            .uri(&format!("/api/lists/{}", $doc.id))
            .set_json($doc)
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        serde_json::from_slice::<List>(&body).expect("list document")
    }};
}

macro_rules! get_list {
    ($app:expr, $list_id:expr) => {{
        let req = test::TestRequest::get()
            .uri(&format!("/api/lists/{}", $list_id))
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        serde_json::from_slice::<List>(&body).expect("list document")
    }};
}

#[actix_web::test]
async fn add_toggle_and_drag_round_trip_through_put() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let mut doc = create_list!(&app, "Chores");

    let sink_id = editor::add_item(&mut doc, "fix sink #home").expect("item");
    editor::add_item(&mut doc, "mow lawn #garden").expect("item");
    let shop_id = editor::add_item(&mut doc, "weekly shop").expect("item");
    assert!(editor::add_item(&mut doc, "   ").is_none());

    let sink = doc.items.iter_mut().find(|item| item.id == sink_id).unwrap();
    assert!(editor::toggle_completed(sink));

    // Drag the last item onto the first, as the drop handler reports it.
    assert!(ordering::move_relative_to(&mut doc, &shop_id, &sink_id));

    let stored = put_list!(&app, &doc);
    let sequence: Vec<&str> = stored
        .items
        .iter()
        .map(|item| item.text.as_str())
        .collect();
    assert_eq!(sequence, vec!["weekly shop", "fix sink #home", "mow lawn #garden"]);
    let orders: Vec<i64> = stored.items.iter().map(|item| item.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
    assert!(stored.items[1].completed);

    // The persisted document matches what another client would fetch.
    let fetched = get_list!(&app, &stored.id);
    assert_eq!(
        serde_json::to_value(&fetched).unwrap(),
        serde_json::to_value(&stored).unwrap()
    );
}

#[actix_web::test]
async fn dragging_onto_itself_changes_nothing() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let mut doc = create_list!(&app, "Chores");
    let first = editor::add_item(&mut doc, "one").expect("item");
    editor::add_item(&mut doc, "two").expect("item");
    let before = serde_json::to_value(&doc).unwrap();

    assert!(!ordering::move_relative_to(&mut doc, &first, &first));
    assert!(!ordering::move_relative_to(&mut doc, &first, "gone"));
    assert_eq!(serde_json::to_value(&doc).unwrap(), before);
}

#[actix_web::test]
async fn tag_editor_detach_strips_the_text_and_survives_put() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let mut doc = create_list!(&app, "Chores");
    editor::add_item(&mut doc, "fix sink #home #urgent").expect("item");

    // The user removes #urgent in the tag editor and keeps a detached tag.
    let item = &mut doc.items[0];
    editor::set_tags_from_editor(
        item,
        &["#home".to_string(), "#weekend".to_string()],
    );
    assert_eq!(item.text, "fix sink #home");

    let stored = put_list!(&app, &doc);
    assert_eq!(stored.items[0].text, "fix sink #home");
    assert_eq!(
        stored.items[0].tags,
        vec!["#home".to_string(), "#weekend".to_string()]
    );

    // The detached tag has no textual trace, so a later full-text edit
    // discards it again.
    let mut doc = get_list!(&app, &stored.id);
    assert!(editor::edit_text(&mut doc.items[0], "fix sink #home properly"));
    let stored = put_list!(&app, &doc);
    assert_eq!(stored.items[0].tags, vec!["#home".to_string()]);
}

#[actix_web::test]
async fn filtering_a_fetched_document_uses_and_semantics() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let mut doc = create_list!(&app, "Chores");
    editor::add_item(&mut doc, "fix sink #home #urgent").expect("item");
    editor::add_item(&mut doc, "mow lawn #garden").expect("item");
    editor::add_item(&mut doc, "untagged errand").expect("item");
    let stored = put_list!(&app, &doc);

    let fetched = get_list!(&app, &stored.id);
    assert_eq!(
        filter::available_tags(&fetched),
        vec![
            "#garden".to_string(),
            "#home".to_string(),
            "#urgent".to_string()
        ]
    );

    let visible = filter::visible_items(&fetched, &["#home".to_string(), "#urgent".to_string()]);
    let texts: Vec<&str> = visible.iter().map(|item| item.text.as_str()).collect();
    assert_eq!(texts, vec!["fix sink #home #urgent"]);

    let all = filter::visible_items(&fetched, &[]);
    assert_eq!(all.len(), 3);
}

#[actix_web::test]
async fn deleting_an_item_renumbers_before_the_put() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let mut doc = create_list!(&app, "Chores");
    editor::add_item(&mut doc, "one").expect("item");
    let second = editor::add_item(&mut doc, "two").expect("item");
    editor::add_item(&mut doc, "three").expect("item");

    assert!(editor::delete_item(&mut doc, &second));
    let stored = put_list!(&app, &doc);

    let sequence: Vec<(&str, i64)> = stored
        .items
        .iter()
        .map(|item| (item.text.as_str(), item.order))
        .collect();
    assert_eq!(sequence, vec![("one", 0), ("three", 1)]);
}
