//! Usuario entity model and DTOs.

use obras_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `usuarios` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UsuarioResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: DbId,
    pub nombre_usuario: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub rol_id: DbId,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UsuarioResponse {
    pub id: DbId,
    pub nombre_usuario: String,
    pub email: Option<String>,
    /// Resolved role name (e.g. `"admin"`, `"cliente"`).
    pub rol: String,
    pub rol_id: DbId,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUsuario {
    pub nombre_usuario: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub rol_id: DbId,
}
