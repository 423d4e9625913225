//! Progress-history model.
//!
//! Rows are append-only: created exactly once per progress update by
//! `ObraRepo::record_progress`, never updated or deleted in-app. They
//! disappear only via the obra cascade.

use obras_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A progress-audit row from the `historial_avance` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HistorialAvance {
    pub id: DbId,
    pub obra_id: DbId,
    pub porcentaje_anterior: i32,
    pub porcentaje_nuevo: i32,
    pub comentario: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
