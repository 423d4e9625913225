//! Obra entity model and DTOs.

use chrono::NaiveDate;
use obras_core::types::{DbId, EstadoId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An obra row from the `obras` table.
///
/// `porcentaje_avance` is nullable: it is cleared when an obra is
/// created finalizada and the clearing rule is enabled.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Obra {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub estado_id: EstadoId,
    pub porcentaje_avance: Option<i32>,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin_estimada: Option<NaiveDate>,
    pub fecha_fin_real: Option<NaiveDate>,
    pub observaciones: Option<String>,
    pub cliente_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new obra. Status and percentage are resolved by
/// the handler (label parsing, bounds check, clearing rule) before the
/// insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateObra {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub estado_id: EstadoId,
    pub porcentaje_avance: Option<i32>,
    /// Defaults to today if omitted.
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin_estimada: Option<NaiveDate>,
    pub fecha_fin_real: Option<NaiveDate>,
    pub observaciones: Option<String>,
    pub cliente_id: Option<DbId>,
}
