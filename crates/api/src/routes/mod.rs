pub mod auth;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// /register     POST  register (public)
/// /login        POST  login (public)
/// /hash_demo    GET   hashing demo (public)
/// /users        GET   list accounts
/// /jwt_test     GET   token check (requires session token)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(users::router())
}
