//! Handlers for the `/clientes` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use obras_core::error::CoreError;

use obras_db::models::cliente::{Cliente, CreateCliente};
use obras_db::repositories::{ClienteRepo, UsuarioRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/clientes
///
/// A duplicate razon_social or cuit surfaces as 409 through the
/// unique-constraint classifier; a nonexistent contact user is 404.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCliente>,
) -> AppResult<(StatusCode, Json<Cliente>)> {
    if let Some(usuario_id) = input.contacto_usuario_id {
        UsuarioRepo::find_by_id(&state.pool, usuario_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Usuario",
                id: usuario_id,
            }))?;
    }

    let cliente = ClienteRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(cliente)))
}

/// GET /api/v1/clientes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Cliente>>> {
    let clientes = ClienteRepo::list(&state.pool).await?;
    Ok(Json(clientes))
}
