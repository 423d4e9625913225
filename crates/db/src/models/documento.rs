//! Document-metadata model and DTOs.
//!
//! Rows point at externally stored files; no file content is handled.

use obras_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A document row from the `documentos_obra` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DocumentoObra {
    pub id: DbId,
    pub obra_id: DbId,
    pub tipo_documento: String,
    pub nombre_archivo: String,
    pub url_archivo: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching a document to an obra.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocumentoObra {
    pub tipo_documento: String,
    pub nombre_archivo: String,
    pub url_archivo: String,
}
