//! Route definitions for the `/clientes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cliente;
use crate::state::AppState;

/// Routes mounted at `/clientes`.
///
/// ```text
/// GET  / -> list
/// POST / -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(cliente::list).post(cliente::create))
}
