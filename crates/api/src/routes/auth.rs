//! Route definitions for registration and login.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// POST /register   -> register
/// POST /login      -> login
/// GET  /hash_demo  -> hash_demo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/hash_demo", get(auth::hash_demo))
}
