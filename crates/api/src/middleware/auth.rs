//! Session-token extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use bookshelf_core::error::CoreError;
use bookshelf_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Legacy header some clients send the token in.
const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Account extracted from a valid session token.
///
/// The token is read from `x-access-token` or `Authorization`, with or
/// without a `Bearer ` prefix. A missing token is a 401; a token that fails
/// signature or expiry checks is a 403.
///
/// ```ignore
/// async fn my_handler(account: AuthAccount) -> AppResult<Json<()>> {
///     tracing::info!(account_id = account.account_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthAccount {
    /// The account's internal database id (from `claims.id`).
    pub account_id: DbId,
    /// The account's role priority.
    pub role: i16,
}

impl FromRequestParts<AppState> for AuthAccount {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(ACCESS_TOKEN_HEADER)
            .or_else(|| parts.headers.get("authorization"))
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Auth token is not supplied".into(),
                ))
            })?;

        let token = raw.strip_prefix("Bearer ").unwrap_or(raw);

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected session token");
            AppError::Core(CoreError::Forbidden("Token is not valid".into()))
        })?;

        Ok(AuthAccount {
            account_id: claims.id,
            role: claims.role,
        })
    }
}
