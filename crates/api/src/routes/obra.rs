//! Route definitions for the `/obras` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{documento, obra};
use crate::state::AppState;

/// Routes mounted at `/obras`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// DELETE /{id}             -> delete (cascades to documentos + historial)
/// POST   /{id}/avance      -> registrar_avance
/// GET    /{id}/historial   -> list_historial (newest first)
/// GET    /{id}/documentos  -> documento::list
/// POST   /{id}/documentos  -> documento::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(obra::list).post(obra::create))
        .route("/{id}", get(obra::get_by_id).delete(obra::delete))
        .route("/{id}/avance", post(obra::registrar_avance))
        .route("/{id}/historial", get(obra::list_historial))
        .route(
            "/{id}/documentos",
            get(documento::list).post(documento::create),
        )
}
