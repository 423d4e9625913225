use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is internally reference-counted,
/// the config sits behind `Arc`). Handlers receive everything they need
/// through this struct; there is no process-global state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: obras_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
