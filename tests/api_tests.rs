//! API integration tests
//!
//! Each test drives the full router over a freshly seeded in-memory store.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use biblioteca_server::{config::AppConfig, services::Services, store::Store, AppState};

/// Build an app over a seeded store
fn test_app() -> Router {
    let config = AppConfig::default();
    let services =
        Services::new(Store::seeded(), config.backend.clone()).expect("Failed to create services");

    biblioteca_server::api::create_router(AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("Failed to build request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };

    (status, body)
}

async fn login(app: &Router, username: &str, role: &str) {
    let (status, _) = send(
        app,
        "POST",
        "/login",
        Some(json!({ "username": username, "role": role })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_list_books_returns_seed_catalog() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/books", None).await;

    assert_eq!(status, StatusCode::OK);
    let books = body.as_array().expect("array of books");
    assert_eq!(books.len(), 12);
    assert_eq!(books[0]["title"], "El Quijote");
    assert_eq!(books[1]["status"], "prestado");
    assert_eq!(books[1]["borrowedDate"], "2024-01-10");
    assert_eq!(books[11]["title"], "Drácula");
}

#[tokio::test]
async fn test_guard_redirects_anonymous_from_admin_routes() {
    let app = test_app();

    for (method, uri) in [("GET", "/reports"), ("POST", "/add-book")] {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response
                .headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok()),
            Some("/books")
        );
    }
}

#[tokio::test]
async fn test_guard_redirects_non_admin_user() {
    let app = test_app();
    login(&app, "user", "user").await;

    let (status, _) = send(&app, "GET", "/reports", None).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_admin_can_add_book() {
    let app = test_app();
    login(&app, "admin", "admin").await;

    let (status, body) = send(
        &app,
        "POST",
        "/add-book",
        Some(json!({
            "id": 13,
            "title": "Ficciones",
            "author": "Borges",
            "isbn": "1313",
            "category": "Cuento",
            "status": "disponible",
            "addedDate": "2024-02-01",
            "usuario": null
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "Ficciones");

    let (_, books) = send(&app, "GET", "/books", None).await;
    let books = books.as_array().expect("array of books");
    assert_eq!(books.len(), 13);
    assert_eq!(books.last().map(|b| &b["id"]), Some(&json!(13)));
}

#[tokio::test]
async fn test_delete_book_scenario() {
    let app = test_app();

    let (status, body) = send(&app, "DELETE", "/books/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], true);

    let (_, books) = send(&app, "GET", "/books", None).await;
    let books = books.as_array().expect("array of books");
    assert_eq!(books.len(), 11);
    assert!(books.iter().all(|b| b["id"] != json!(3)));

    // Book id 1 still present unchanged
    let quijote = books
        .iter()
        .find(|b| b["id"] == json!(1))
        .expect("book 1 present");
    assert_eq!(quijote["title"], "El Quijote");
}

#[tokio::test]
async fn test_delete_missing_book_reports_not_found() {
    let app = test_app();

    let (status, body) = send(&app, "DELETE", "/books/99", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], false);

    let (_, books) = send(&app, "GET", "/books", None).await;
    assert_eq!(books.as_array().map(Vec::len), Some(12));
}

#[tokio::test]
async fn test_update_book_scenario() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "PUT",
        "/books/2",
        Some(json!({ "status": "disponible" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], true);
    assert_eq!(body["book"]["status"], "disponible");
    assert_eq!(body["book"]["title"], "Cien Años de Soledad");
    assert_eq!(body["book"]["borrowedDate"], "2024-01-10");
}

#[tokio::test]
async fn test_update_missing_book_reports_not_found() {
    let app = test_app();

    let (status, body) = send(&app, "PUT", "/books/99", Some(json!({ "title": "X" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found"], false);
    assert!(body.get("book").is_none());
}

#[tokio::test]
async fn test_session_lifecycle() {
    let app = test_app();

    let (_, body) = send(&app, "GET", "/user", None).await;
    assert_eq!(body, Value::Null);

    login(&app, "admin", "admin").await;
    let (_, body) = send(&app, "GET", "/user", None).await;
    assert_eq!(body["username"], "admin");
    assert_eq!(body["role"], "admin");

    // Re-login replaces the session
    login(&app, "user", "user").await;
    let (_, body) = send(&app, "GET", "/user", None).await;
    assert_eq!(body["username"], "user");

    let (status, _) = send(&app, "POST", "/logout", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, body) = send(&app, "GET", "/user", None).await;
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_login_rejects_malformed_email() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        Some(json!({ "username": "admin", "email": "not-an-email", "role": "admin" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_admin_report() {
    let app = test_app();
    login(&app, "admin", "admin").await;

    let (status, body) = send(&app, "GET", "/reports", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 12);

    let by_status = body["by_status"].as_array().expect("status entries");
    let disponibles = by_status
        .iter()
        .find(|e| e["label"] == "disponible")
        .expect("disponible entry");
    assert_eq!(disponibles["value"], 10);
}
