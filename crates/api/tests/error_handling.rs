//! Tests for the mapping from `AppError` to HTTP responses.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

use mylearn_api::error::AppError;
use mylearn_core::error::CoreError;

async fn body_text(error: AppError) -> (StatusCode, String) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_validation_error_is_400() {
    let (status, body) =
        body_text(CoreError::Validation("Missing required field 'lab-title'".into()).into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("VALIDATION_ERROR"));
    assert!(body.contains("Missing required field &#x27;lab-title&#x27;"));
}

#[tokio::test]
async fn test_integrity_error_is_500() {
    let (status, body) =
        body_text(CoreError::Integrity("Student 3 belongs to missing group 9".into()).into())
            .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("INTEGRITY_ERROR"));
}

#[tokio::test]
async fn test_row_not_found_is_404() {
    let (status, body) = body_text(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("NOT_FOUND"));
}

#[tokio::test]
async fn test_bad_request_message_is_escaped() {
    let (status, body) = body_text(AppError::BadRequest("<b>bad</b>".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("&lt;b&gt;bad&lt;/b&gt;"));
    assert!(!body.contains("<b>bad</b>"));
}

#[tokio::test]
async fn test_io_error_is_500() {
    let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let (status, body) = body_text(AppError::Io(err)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("IO_ERROR"));
    assert!(body.contains("read-only"));
}
