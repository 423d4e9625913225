//! Persistence layer for the obras backend.
//!
//! Pool construction, health check, migration runner/verifier, plus the
//! `models` and `repositories` modules. Migrations live at the
//! workspace-root `db/migrations/` directory.

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

static MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations");

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations.
///
/// Only called at startup when `MIGRATE_ON_START=true`; production
/// schemas are migrated out-of-band.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Error from [`check_migrations`].
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("migration {version} has not been applied; run the migrator before starting")]
    Pending { version: i64 },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Verify that every bundled migration has been applied, without
/// mutating the schema. Startup refuses to serve against a stale schema.
pub async fn check_migrations(pool: &DbPool) -> Result<(), SchemaError> {
    let applied: Vec<(i64,)> =
        match sqlx::query_as("SELECT version FROM _sqlx_migrations WHERE success")
            .fetch_all(pool)
            .await
        {
            Ok(rows) => rows,
            // undefined_table: the migrator has never run against this
            // database, so every migration is pending.
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some("42P01") => Vec::new(),
            Err(e) => return Err(e.into()),
        };
    let applied: std::collections::HashSet<i64> = applied.into_iter().map(|(v,)| v).collect();

    for migration in MIGRATOR.iter() {
        if migration.migration_type.is_down_migration() {
            continue;
        }
        if !applied.contains(&migration.version) {
            return Err(SchemaError::Pending {
                version: migration.version,
            });
        }
    }
    Ok(())
}
