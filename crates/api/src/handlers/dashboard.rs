//! Handler for the authenticated dashboard: obra totals, average
//! completion, and the obra list with client names resolved.

use axum::extract::State;
use axum::Json;
use obras_core::estado::EstadoObra;
use obras_core::types::DbId;
use serde::Serialize;

use obras_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// One obra row in the dashboard listing.
#[derive(Debug, Serialize)]
pub struct ObraResumen {
    pub id: DbId,
    pub nombre: String,
    /// Estado label, or `"desconocido"` for an unmapped lookup id.
    pub estado: String,
    pub porcentaje_avance: Option<i32>,
    pub cliente: Option<String>,
}

/// Response body for `GET /dashboard`.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_obras: i64,
    pub en_curso: i64,
    pub finalizadas: i64,
    /// Average completion of obras en curso; null when none has a
    /// stored percentage.
    pub avance_promedio: Option<f64>,
    pub obras: Vec<ObraResumen>,
}

/// GET /api/v1/dashboard (requires auth)
pub async fn get(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DashboardResponse>> {
    tracing::debug!(usuario_id = auth_user.usuario_id, "Dashboard requested");

    let resumen = DashboardRepo::resumen(&state.pool).await?;
    let rows = DashboardRepo::obras_con_cliente(&state.pool).await?;

    let obras = rows
        .into_iter()
        .map(|row| ObraResumen {
            id: row.id,
            nombre: row.nombre,
            estado: EstadoObra::from_id(row.estado_id)
                .map(|e| e.label().to_string())
                .unwrap_or_else(|| "desconocido".to_string()),
            porcentaje_avance: row.porcentaje_avance,
            cliente: row.cliente,
        })
        .collect();

    Ok(Json(DashboardResponse {
        total_obras: resumen.total,
        en_curso: resumen.en_curso,
        finalizadas: resumen.finalizadas,
        avance_promedio: resumen.avance_promedio,
        obras,
    }))
}
