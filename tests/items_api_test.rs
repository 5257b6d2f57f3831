mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn health_endpoint_reports_running() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = TestApp::json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["message"].as_str().unwrap().contains("running"));
}

#[tokio::test]
async fn add_item_requires_name_and_location() {
    let app = TestApp::new().await;

    let response = app
        .multipart("/api/add_item", &[("item_name", "Keys")], None)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .multipart("/api/add_item", &[("location", "Kitchen")], None)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn item_lifecycle_add_find_delete() {
    let app = TestApp::new().await;

    // add_item(name="Keys", location="Kitchen drawer") -> id=1
    let response = app
        .multipart(
            "/api/add_item",
            &[("item_name", "Keys"), ("location", "Kitchen drawer")],
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = TestApp::json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["id"], 1);
    assert_eq!(body["item_name"], "Keys");

    // find_item("where are my keys") -> id=1, location="Kitchen drawer"
    let response = app
        .request(
            Method::POST,
            "/api/find_item",
            Some(json!({"query": "where are my keys"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = TestApp::json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["location"], "Kitchen drawer");
    assert!(body["timestamp"].is_string());

    // delete_item(1)
    let response = app
        .request(Method::DELETE, "/api/delete_item/1", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = TestApp::json(response).await;
    assert_eq!(body["success"], true);

    // find_item("keys") -> 404
    let response = app
        .request(Method::POST, "/api/find_item", Some(json!({"query": "keys"})))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn find_item_rejects_empty_and_unintelligible_queries() {
    let app = TestApp::new().await;
    app.multipart(
        "/api/add_item",
        &[("item_name", "Keys"), ("location", "Kitchen")],
        None,
    )
    .await;

    let response = app
        .request(Method::POST, "/api/find_item", Some(json!({"query": "  "})))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Stop words only: extractor yields nothing.
    let response = app
        .request(
            Method::POST,
            "/api/find_item",
            Some(json!({"query": "where is my"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn find_item_prefers_most_recent_match() {
    let app = TestApp::new().await;
    for location in ["Old drawer", "New hook"] {
        app.multipart(
            "/api/add_item",
            &[("item_name", "Car Keys"), ("location", location)],
            None,
        )
        .await;
    }

    let response = app
        .request(Method::POST, "/api/find_item", Some(json!({"query": "keys"})))
        .await;
    let body = TestApp::json(response).await;
    assert_eq!(body["location"], "New hook");
}

#[tokio::test]
async fn get_all_items_is_newest_first() {
    let app = TestApp::new().await;
    for name in ["Keys", "Wallet", "Phone"] {
        app.multipart(
            "/api/add_item",
            &[("item_name", name), ("location", "Somewhere")],
            None,
        )
        .await;
    }

    let response = app.request(Method::GET, "/api/get_all_items", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = TestApp::json(response).await;

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["item_name"], "Phone");
    assert_eq!(items[2]["item_name"], "Keys");
}

#[tokio::test]
async fn delete_item_unknown_id_is_404() {
    let app = TestApp::new().await;
    let response = app
        .request(Method::DELETE, "/api/delete_item/99", None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = TestApp::json(response).await;
    assert_eq!(body["error"], "Not Found");
    assert!(body["message"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn ids_keep_increasing_after_deletion() {
    let app = TestApp::new().await;

    let response = app
        .multipart(
            "/api/add_item",
            &[("item_name", "Keys"), ("location", "Kitchen")],
            None,
        )
        .await;
    let first = TestApp::json(response).await["id"].as_u64().unwrap();

    app.request(Method::DELETE, &format!("/api/delete_item/{first}"), None)
        .await;

    let response = app
        .multipart(
            "/api/add_item",
            &[("item_name", "Wallet"), ("location", "Desk")],
            None,
        )
        .await;
    let second = TestApp::json(response).await["id"].as_u64().unwrap();
    assert!(second > first);
}
