//! Rol entity model.

use obras_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A role row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rol {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
