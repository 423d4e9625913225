//! Aggregation rows backing the dashboard endpoint.

use obras_core::types::{DbId, EstadoId};
use sqlx::FromRow;

/// Obra totals and the average completion of obras en curso.
#[derive(Debug, Clone, FromRow)]
pub struct ResumenObras {
    pub total: i64,
    pub en_curso: i64,
    pub finalizadas: i64,
    /// NULL when no obra en curso has a stored percentage.
    pub avance_promedio: Option<f64>,
}

/// One obra row for the dashboard listing, with the client name resolved.
#[derive(Debug, Clone, FromRow)]
pub struct ObraResumenRow {
    pub id: DbId,
    pub nombre: String,
    pub estado_id: EstadoId,
    pub porcentaje_avance: Option<i32>,
    pub cliente: Option<String>,
}
