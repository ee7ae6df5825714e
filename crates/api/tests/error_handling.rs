//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use bookshelf_api::error::AppError;
use bookshelf_core::error::CoreError;
use bookshelf_db::error::{StoreError, UniqueField};
use http_body_util::BodyExt;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn validation_error_returns_400_with_rule_message() {
    let err = AppError::Core(CoreError::Validation("Missing required information".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Missing required information");
}

#[tokio::test]
async fn username_conflict_returns_400() {
    let (status, json) =
        error_to_response(AppError::Store(StoreError::Conflict(UniqueField::Username))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Username exists");
}

#[tokio::test]
async fn email_conflict_returns_400() {
    let (status, json) =
        error_to_response(AppError::Store(StoreError::Conflict(UniqueField::Email))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Email exists");
}

#[tokio::test]
async fn database_error_returns_500_without_details() {
    let err = AppError::Store(StoreError::Database(sqlx::Error::PoolTimedOut));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "server error - contact support");
}

#[tokio::test]
async fn raw_sqlx_error_is_classified() {
    let err = AppError::from(sqlx::Error::RowNotFound);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "server error - contact support");
}

#[tokio::test]
async fn internal_error_is_sanitized() {
    let err = AppError::InternalError("token signing exploded: key=abc".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "server error - contact support");
}

#[tokio::test]
async fn unauthorized_and_forbidden_map_to_401_and_403() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Unauthorized("no token".into()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "no token");

    let (status, _) =
        error_to_response(AppError::Core(CoreError::Forbidden("bad token".into()))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn bad_request_returns_400() {
    let (status, json) =
        error_to_response(AppError::BadRequest("Invalid Credentials".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid Credentials");
}
