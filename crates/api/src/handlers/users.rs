//! Handlers for account listing and the token check.

use axum::extract::State;
use axum::Json;
use bookshelf_core::types::DbId;
use bookshelf_db::models::account::Account;
use bookshelf_db::repositories::AccountRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthAccount;
use crate::state::AppState;

/// Response body for `GET /jwt_test`.
#[derive(Debug, Serialize)]
pub struct TokenCheckResponse {
    pub message: String,
    pub id: DbId,
    pub role: i16,
}

/// GET /users
///
/// Every account, newest first. Credentials are never included.
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<Account>>> {
    let accounts = AccountRepo::list(&state.pool).await?;
    Ok(Json(accounts))
}

/// GET /jwt_test (requires a session token)
pub async fn jwt_test(account: AuthAccount) -> Json<TokenCheckResponse> {
    Json(TokenCheckResponse {
        message: format!("Your token is valid and your role is: {}", account.role),
        id: account.account_id,
        role: account.role,
    })
}
