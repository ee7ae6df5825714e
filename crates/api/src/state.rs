use std::sync::Arc;

use crate::config::ServerConfig;
use crate::registration::RegistrationPipeline;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool and pipeline are reference-counted inside.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: bookshelf_db::DbPool,
    /// Server configuration, including the token signing settings.
    pub config: Arc<ServerConfig>,
    /// Registration pipeline with its store and signing config injected.
    pub registration: RegistrationPipeline,
}
