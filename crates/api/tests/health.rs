//! Integration tests for the health check and request-level middleware.

mod common;

use axum::http::StatusCode;
use sqlx::SqlitePool;

use common::{body_json, build_test_app, get};

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_reports_ok(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], true);
    assert_eq!(json["pending_migrations"], 0);
    assert_eq!(json["uploads_writable"], true);
    assert!(json["version"].is_string());
    assert!(!app.upload_dir().join(".write-check").exists());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_degraded_when_upload_dir_is_a_file(pool: SqlitePool) {
    let app = build_test_app(pool);
    std::fs::write(app.upload_dir(), "not a directory").unwrap();

    let json = body_json(get(&app, "/health").await).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["uploads_writable"], false);
    assert_eq!(json["database"], true);
}

#[sqlx::test(migrations = false)]
async fn test_health_degraded_before_migrations(pool: SqlitePool) {
    let app = build_test_app(pool);

    let json = body_json(get(&app, "/health").await).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["database"], true);
    assert_eq!(json["pending_migrations"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_route_returns_404(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = get(&app, "/no_such_page").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_responses_carry_request_id(pool: SqlitePool) {
    let app = build_test_app(pool);
    let response = get(&app, "/labs").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_static_files_are_served(pool: SqlitePool) {
    let app = build_test_app(pool);
    std::fs::write(app.static_dir.path().join("style.css"), "body {}").unwrap();

    let response = get(&app, "/static/style.css").await;
    assert_eq!(response.status(), StatusCode::OK);
}
