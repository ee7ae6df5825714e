//! Handlers for registration, login and the hashing demo.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bookshelf_core::credentials::{generate_hash, generate_salt, SALT_LENGTH};
use bookshelf_core::error::CoreError;
use bookshelf_core::types::DbId;
use bookshelf_core::validation::RegistrationForm;
use bookshelf_db::repositories::AccountRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Sample password hashed by `GET /hash_demo`.
pub const DEMO_PASSWORD: &str = "password12345";

/// Returned for both unknown emails and wrong passwords.
const INVALID_CREDENTIALS: &str = "Invalid Credentials";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /login`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Session token plus the account it was issued for.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub id: DbId,
}

/// Response body for `GET /hash_demo`.
#[derive(Debug, Serialize)]
pub struct HashDemoResponse {
    pub salt: String,
    pub salted_hash: String,
    pub unsalted_hash: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register
///
/// An unreadable body is treated as an empty form, so it fails the first
/// rule (email) like any other missing field.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegistrationForm>, JsonRejection>,
) -> AppResult<(StatusCode, Json<TokenResponse>)> {
    let form = payload.map(|Json(form)| form).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable registration body");
        RegistrationForm::default()
    });

    let registered = state.registration.register(&form).await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            access_token: registered.access_token,
            id: registered.id,
        }),
    ))
}

/// POST /login
///
/// Verify an email + password pair against the stored salted hash.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<TokenResponse>> {
    let input = payload.map(|Json(input)| input).unwrap_or_default();

    let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
    let (Some(email), Some(password)) = (non_empty(input.email), non_empty(input.password)) else {
        return Err(missing_information());
    };

    let login = AccountRepo::find_login_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::BadRequest(INVALID_CREDENTIALS.into()))?;

    if !login.salted().verify(&password) {
        tracing::info!(account_id = login.account_id, "Login rejected: wrong password");
        return Err(AppError::BadRequest(INVALID_CREDENTIALS.into()));
    }

    let access_token = generate_access_token(login.account_id, login.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(TokenResponse {
        access_token,
        id: login.account_id,
    }))
}

/// GET /hash_demo
///
/// Hash [`DEMO_PASSWORD`] with a fresh salt and with no salt at all.
pub async fn hash_demo() -> Json<HashDemoResponse> {
    let salt = generate_salt(SALT_LENGTH);
    let salted_hash = generate_hash(DEMO_PASSWORD, &salt);
    let unsalted_hash = generate_hash(DEMO_PASSWORD, "");

    Json(HashDemoResponse {
        salt,
        salted_hash,
        unsalted_hash,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn missing_information() -> AppError {
    AppError::Core(CoreError::Validation(
        "Missing required information".into(),
    ))
}
