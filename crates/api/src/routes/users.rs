//! Route definitions for account listing and the token check.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// ```text
/// GET /users     -> list_users
/// GET /jwt_test  -> jwt_test (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/jwt_test", get(users::jwt_test))
}
