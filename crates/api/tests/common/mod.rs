#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use bookshelf_api::auth::jwt::JwtConfig;
use bookshelf_api::config::ServerConfig;
use bookshelf_api::registration::{AccountStore, PgAccountStore, RegistrationPipeline};
use bookshelf_api::router::build_app_router;
use bookshelf_api::state::AppState;
use bookshelf_core::credentials::SaltedCredential;
use bookshelf_core::types::DbId;
use bookshelf_db::error::{StoreError, UniqueField};
use bookshelf_db::models::account::CreateAccount;
use bookshelf_db::PoolSettings;

/// Signing secret shared by every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: "postgres://localhost/bookshelf_test".to_string(),
        pool: PoolSettings::default(),
        jwt: JwtConfig::new(TEST_SECRET),
    }
}

/// Build the full application router against a real database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let store = Arc::new(PgAccountStore::new(pool.clone()));
    build_app(pool, store)
}

/// Build the application router with a custom account store.
///
/// The pool is lazy and never connects, so routes that only touch the store
/// run without a database.
pub fn build_app_with_store(store: Arc<dyn AccountStore>) -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/unused")
        .expect("lazy pool should build");
    build_app(pool, store)
}

fn build_app(pool: PgPool, store: Arc<dyn AccountStore>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        registration: RegistrationPipeline::new(store, config.jwt.clone()),
    };
    build_app_router(state, &config)
}

/// In-memory account store with the same uniqueness rules as the schema.
#[derive(Default)]
pub struct MemoryStore {
    pub rows: Mutex<Vec<(CreateAccount, SaltedCredential)>>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.rows.lock().expect("lock poisoned").len()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn create_account(
        &self,
        account: &CreateAccount,
        credential: &SaltedCredential,
    ) -> Result<DbId, StoreError> {
        let mut rows = self.rows.lock().expect("lock poisoned");
        if rows.iter().any(|(a, _)| a.username == account.username) {
            return Err(StoreError::Conflict(UniqueField::Username));
        }
        if rows.iter().any(|(a, _)| a.email == account.email) {
            return Err(StoreError::Conflict(UniqueField::Email));
        }
        rows.push((account.clone(), credential.clone()));
        Ok(rows.len() as DbId)
    }
}

/// A registration body that passes every rule.
pub fn valid_registration(username: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "firstname": "Ada",
        "lastname": "Lovelace",
        "username": username,
        "email": email,
        "password": "Abcdef1!",
        "role": "3",
        "phone": "253-555-0100",
    })
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

pub async fn get_with_header(
    app: Router,
    uri: &str,
    name: &str,
    value: &str,
) -> Response<Body> {
    let request = Request::get(uri)
        .header(name, value)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
