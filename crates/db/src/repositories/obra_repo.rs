//! Repository for the `obras` table, including the progress-update
//! transaction that feeds `historial_avance`.

use obras_core::avance;
use obras_core::types::DbId;
use sqlx::PgPool;

use crate::models::historial::HistorialAvance;
use crate::models::obra::{CreateObra, Obra};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre, descripcion, estado_id, porcentaje_avance, fecha_inicio, \
    fecha_fin_estimada, fecha_fin_real, observaciones, cliente_id, created_at, updated_at";

/// Column list for `historial_avance`, used inside the progress transaction.
const HISTORIAL_COLUMNS: &str =
    "id, obra_id, porcentaje_anterior, porcentaje_nuevo, comentario, created_at, updated_at";

/// Provides CRUD and progress-tracking operations for obras.
pub struct ObraRepo;

impl ObraRepo {
    /// Insert a new obra, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateObra) -> Result<Obra, sqlx::Error> {
        let query = format!(
            "INSERT INTO obras
                (nombre, descripcion, estado_id, porcentaje_avance, fecha_inicio,
                 fecha_fin_estimada, fecha_fin_real, observaciones, cliente_id)
             VALUES ($1, $2, $3, $4, COALESCE($5, CURRENT_DATE), $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Obra>(&query)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(input.estado_id)
            .bind(input.porcentaje_avance)
            .bind(input.fecha_inicio)
            .bind(input.fecha_fin_estimada)
            .bind(input.fecha_fin_real)
            .bind(&input.observaciones)
            .bind(input.cliente_id)
            .fetch_one(pool)
            .await
    }

    /// Find an obra by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Obra>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM obras WHERE id = $1");
        sqlx::query_as::<_, Obra>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all obras ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Obra>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM obras ORDER BY created_at DESC");
        sqlx::query_as::<_, Obra>(&query).fetch_all(pool).await
    }

    /// Permanently delete an obra by ID. Returns `true` if a row was
    /// removed. Documents and history rows cascade at the schema level.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM obras WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Record a progress update for an obra.
    ///
    /// Runs in a single transaction:
    /// 1. lock the obra row (`FOR UPDATE`) and read its current percentage;
    /// 2. insert one `historial_avance` row (before, after, comment);
    /// 3. update the obra's stored percentage to the new value.
    ///
    /// The row lock keeps two concurrent updates from both reading the
    /// same `porcentaje_anterior`. Any failure rolls the whole thing
    /// back, so the snapshot and the audit trail never diverge.
    ///
    /// Returns `None` if no obra with the given ID exists. The caller
    /// validates `porcentaje_nuevo` against 0..=100 beforehand.
    pub async fn record_progress(
        pool: &PgPool,
        obra_id: DbId,
        porcentaje_nuevo: i32,
        comentario: Option<&str>,
    ) -> Result<Option<(Obra, HistorialAvance)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let lock_query = format!("SELECT {COLUMNS} FROM obras WHERE id = $1 FOR UPDATE");
        let Some(obra) = sqlx::query_as::<_, Obra>(&lock_query)
            .bind(obra_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let porcentaje_anterior = avance::porcentaje_anterior(obra.porcentaje_avance);

        let insert_query = format!(
            "INSERT INTO historial_avance (obra_id, porcentaje_anterior, porcentaje_nuevo, comentario)
             VALUES ($1, $2, $3, $4)
             RETURNING {HISTORIAL_COLUMNS}"
        );
        let historial = sqlx::query_as::<_, HistorialAvance>(&insert_query)
            .bind(obra_id)
            .bind(porcentaje_anterior)
            .bind(porcentaje_nuevo)
            .bind(comentario)
            .fetch_one(&mut *tx)
            .await?;

        let update_query = format!(
            "UPDATE obras SET porcentaje_avance = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let obra = sqlx::query_as::<_, Obra>(&update_query)
            .bind(obra_id)
            .bind(porcentaje_nuevo)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some((obra, historial)))
    }
}
