//! Cliente entity model and DTOs.

use obras_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A client row from the `clientes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cliente {
    pub id: DbId,
    pub razon_social: String,
    pub cuit: Option<String>,
    pub direccion: Option<String>,
    pub contacto_usuario_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCliente {
    pub razon_social: String,
    pub cuit: Option<String>,
    pub direccion: Option<String>,
    pub contacto_usuario_id: Option<DbId>,
}
