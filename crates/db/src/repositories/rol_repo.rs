//! Repository for the `roles` table.

use obras_core::types::DbId;
use sqlx::PgPool;

use crate::models::rol::Rol;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombre, descripcion, created_at, updated_at";

/// Provides read operations for roles.
pub struct RolRepo;

impl RolRepo {
    /// Find a role by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rol>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE id = $1");
        sqlx::query_as::<_, Rol>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a role by name (case-sensitive).
    pub async fn find_by_nombre(pool: &PgPool, nombre: &str) -> Result<Option<Rol>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE nombre = $1");
        sqlx::query_as::<_, Rol>(&query)
            .bind(nombre)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a role ID to its name, returning `"unknown"` if the ID is missing.
    pub async fn resolve_nombre(pool: &PgPool, rol_id: DbId) -> Result<String, sqlx::Error> {
        Ok(Self::find_by_id(pool, rol_id)
            .await?
            .map(|r| r.nombre)
            .unwrap_or_else(|| "unknown".to_string()))
    }
}
