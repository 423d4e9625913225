//! Handlers for document metadata nested under an obra.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use obras_core::error::CoreError;
use obras_core::types::DbId;

use obras_db::models::documento::{CreateDocumentoObra, DocumentoObra};
use obras_db::repositories::{DocumentoObraRepo, ObraRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/obras/{id}/documentos
///
/// Attach document metadata to an obra. The file itself lives in
/// external storage; only the pointer is recorded. 404 if the obra does
/// not exist, and no row is created.
pub async fn create(
    State(state): State<AppState>,
    Path(obra_id): Path<DbId>,
    Json(input): Json<CreateDocumentoObra>,
) -> AppResult<(StatusCode, Json<DocumentoObra>)> {
    ObraRepo::find_by_id(&state.pool, obra_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Obra",
            id: obra_id,
        }))?;

    let documento = DocumentoObraRepo::create(&state.pool, obra_id, &input).await?;
    Ok((StatusCode::CREATED, Json(documento)))
}

/// GET /api/v1/obras/{id}/documentos
pub async fn list(
    State(state): State<AppState>,
    Path(obra_id): Path<DbId>,
) -> AppResult<Json<Vec<DocumentoObra>>> {
    ObraRepo::find_by_id(&state.pool, obra_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Obra",
            id: obra_id,
        }))?;

    let documentos = DocumentoObraRepo::list_by_obra(&state.pool, obra_id).await?;
    Ok(Json(documentos))
}
