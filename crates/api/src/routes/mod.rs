//! Route assembly.

pub mod auth;
pub mod cliente;
pub mod dashboard;
pub mod health;
pub mod obra;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 create user (public)
/// /auth/login                    login (public)
/// /auth/refresh                  refresh (public)
/// /auth/logout                   logout (requires auth)
///
/// /dashboard                     obra summary (requires auth)
///
/// /obras                         list, create
/// /obras/{id}                    get, delete (cascades)
/// /obras/{id}/avance             record progress update (POST)
/// /obras/{id}/historial          progress history, newest first (GET)
/// /obras/{id}/documentos         list, attach document metadata
///
/// /clientes                      list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // Authenticated obra summary.
        .nest("/dashboard", dashboard::router())
        // Obras, with nested progress and document sub-resources.
        .nest("/obras", obra::router())
        // Clients.
        .nest("/clientes", cliente::router())
}
