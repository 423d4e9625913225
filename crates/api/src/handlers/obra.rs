//! Handlers for the `/obras` resource, including progress updates and
//! the history listing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use obras_core::avance::{porcentaje_para_estado, validate_porcentaje};
use obras_core::error::CoreError;
use obras_core::estado::EstadoObra;
use obras_core::types::DbId;
use serde::{Deserialize, Serialize};

use obras_db::models::historial::HistorialAvance;
use obras_db::models::obra::{CreateObra, Obra};
use obras_db::repositories::{ClienteRepo, HistorialAvanceRepo, ObraRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /obras`. The status travels as a label
/// (`"en_curso"` / `"finalizada"`), never a raw lookup id.
#[derive(Debug, Deserialize)]
pub struct CreateObraRequest {
    pub nombre: String,
    pub descripcion: Option<String>,
    /// Defaults to `"en_curso"` if omitted.
    pub estado: Option<String>,
    pub porcentaje_avance: Option<i32>,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin_estimada: Option<NaiveDate>,
    pub fecha_fin_real: Option<NaiveDate>,
    pub observaciones: Option<String>,
    pub cliente_id: Option<DbId>,
}

/// Request body for `POST /obras/{id}/avance`.
#[derive(Debug, Deserialize)]
pub struct RegistrarAvanceRequest {
    pub porcentaje: i32,
    pub comentario: Option<String>,
}

/// Response for a successful progress update: the refreshed obra
/// snapshot plus the history row the update created.
#[derive(Debug, Serialize)]
pub struct AvanceResponse {
    pub obra: Obra,
    pub avance: HistorialAvance,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/obras
///
/// If `cliente_id` is supplied, the client must exist (404 otherwise).
/// The percentage is validated against 0..=100 and then resolved by the
/// estado rule: obras en curso default to 0, obras finalizadas are
/// cleared when `FINALIZADA_LIMPIA_PORCENTAJE` is enabled.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateObraRequest>,
) -> AppResult<(StatusCode, Json<Obra>)> {
    let estado = match input.estado.as_deref() {
        Some(label) => EstadoObra::parse(label).map_err(AppError::Core)?,
        None => EstadoObra::EnCurso,
    };

    if let Some(porcentaje) = input.porcentaje_avance {
        validate_porcentaje(porcentaje).map_err(AppError::Core)?;
    }

    if let Some(cliente_id) = input.cliente_id {
        ClienteRepo::find_by_id(&state.pool, cliente_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Cliente",
                id: cliente_id,
            }))?;
    }

    let porcentaje_avance = porcentaje_para_estado(
        estado,
        input.porcentaje_avance,
        state.config.finalizada_limpia_porcentaje,
    );

    let obra = ObraRepo::create(
        &state.pool,
        &CreateObra {
            nombre: input.nombre,
            descripcion: input.descripcion,
            estado_id: estado.id(),
            porcentaje_avance,
            fecha_inicio: input.fecha_inicio,
            fecha_fin_estimada: input.fecha_fin_estimada,
            fecha_fin_real: input.fecha_fin_real,
            observaciones: input.observaciones,
            cliente_id: input.cliente_id,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(obra)))
}

/// GET /api/v1/obras
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Obra>>> {
    let obras = ObraRepo::list(&state.pool).await?;
    Ok(Json(obras))
}

/// GET /api/v1/obras/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Obra>> {
    let obra = ObraRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Obra", id }))?;
    Ok(Json(obra))
}

/// DELETE /api/v1/obras/{id}
///
/// Hard delete; documents and history rows cascade at the schema level.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ObraRepo::hard_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Obra", id }))
    }
}

/// POST /api/v1/obras/{id}/avance
///
/// Record a progress update: one immutable history row plus the
/// snapshot change, atomically.
pub async fn registrar_avance(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RegistrarAvanceRequest>,
) -> AppResult<(StatusCode, Json<AvanceResponse>)> {
    validate_porcentaje(input.porcentaje).map_err(AppError::Core)?;

    let (obra, avance) =
        ObraRepo::record_progress(&state.pool, id, input.porcentaje, input.comentario.as_deref())
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Obra", id }))?;

    tracing::info!(
        obra_id = id,
        porcentaje_anterior = avance.porcentaje_anterior,
        porcentaje_nuevo = avance.porcentaje_nuevo,
        "Progress recorded"
    );

    Ok((StatusCode::CREATED, Json(AvanceResponse { obra, avance })))
}

/// GET /api/v1/obras/{id}/historial
///
/// Progress history for an obra, newest first. 404 if the obra does not
/// exist (an empty list only means "no updates yet").
pub async fn list_historial(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<HistorialAvance>>> {
    ObraRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Obra", id }))?;

    let historial = HistorialAvanceRepo::list_by_obra(&state.pool, id).await?;
    Ok(Json(historial))
}
