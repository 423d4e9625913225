//! Repository for the `documentos_obra` table.

use obras_core::types::DbId;
use sqlx::PgPool;

use crate::models::documento::{CreateDocumentoObra, DocumentoObra};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, obra_id, tipo_documento, nombre_archivo, url_archivo, created_at, updated_at";

/// Provides operations for obra document metadata.
pub struct DocumentoObraRepo;

impl DocumentoObraRepo {
    /// Attach a document to an obra, returning the created row.
    ///
    /// The caller verifies the obra exists first so a missing parent
    /// surfaces as NotFound rather than a raw FK violation.
    pub async fn create(
        pool: &PgPool,
        obra_id: DbId,
        input: &CreateDocumentoObra,
    ) -> Result<DocumentoObra, sqlx::Error> {
        let query = format!(
            "INSERT INTO documentos_obra (obra_id, tipo_documento, nombre_archivo, url_archivo)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DocumentoObra>(&query)
            .bind(obra_id)
            .bind(&input.tipo_documento)
            .bind(&input.nombre_archivo)
            .bind(&input.url_archivo)
            .fetch_one(pool)
            .await
    }

    /// List all documents for an obra, newest first.
    pub async fn list_by_obra(
        pool: &PgPool,
        obra_id: DbId,
    ) -> Result<Vec<DocumentoObra>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documentos_obra
             WHERE obra_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, DocumentoObra>(&query)
            .bind(obra_id)
            .fetch_all(pool)
            .await
    }

    /// Count the documents for an obra.
    pub async fn count_by_obra(pool: &PgPool, obra_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM documentos_obra WHERE obra_id = $1")
            .bind(obra_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
