//! Repository for the `clientes` table.

use obras_core::types::DbId;
use sqlx::PgPool;

use crate::models::cliente::{Cliente, CreateCliente};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, razon_social, cuit, direccion, contacto_usuario_id, created_at, updated_at";

/// Provides CRUD operations for clientes.
pub struct ClienteRepo;

impl ClienteRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCliente) -> Result<Cliente, sqlx::Error> {
        let query = format!(
            "INSERT INTO clientes (razon_social, cuit, direccion, contacto_usuario_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cliente>(&query)
            .bind(&input.razon_social)
            .bind(&input.cuit)
            .bind(&input.direccion)
            .bind(input.contacto_usuario_id)
            .fetch_one(pool)
            .await
    }

    /// Find a client by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Cliente>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clientes WHERE id = $1");
        sqlx::query_as::<_, Cliente>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all clients ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Cliente>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clientes ORDER BY created_at DESC");
        sqlx::query_as::<_, Cliente>(&query).fetch_all(pool).await
    }
}
