use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: notes_db::DbPool,
    /// Server configuration; `build_app_router` reads CORS origins and the
    /// request timeout from it.
    pub config: Arc<ServerConfig>,
}
