//! Repository for the `historial_avance` table.
//!
//! Read-only: rows are inserted exclusively by
//! `ObraRepo::record_progress` inside its transaction.

use obras_core::types::DbId;
use sqlx::PgPool;

use crate::models::historial::HistorialAvance;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, obra_id, porcentaje_anterior, porcentaje_nuevo, comentario, created_at, updated_at";

/// Provides read operations for the progress audit trail.
pub struct HistorialAvanceRepo;

impl HistorialAvanceRepo {
    /// List all history rows for an obra, newest first.
    ///
    /// The `id DESC` tiebreak keeps two updates landing in the same
    /// millisecond in insertion order.
    pub async fn list_by_obra(
        pool: &PgPool,
        obra_id: DbId,
    ) -> Result<Vec<HistorialAvance>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM historial_avance
             WHERE obra_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, HistorialAvance>(&query)
            .bind(obra_id)
            .fetch_all(pool)
            .await
    }

    /// Count the history rows for an obra.
    pub async fn count_by_obra(pool: &PgPool, obra_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM historial_avance WHERE obra_id = $1")
            .bind(obra_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
