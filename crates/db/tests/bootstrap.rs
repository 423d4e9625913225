use obras_core::roles::{ROL_ADMIN, ROL_CLIENTE, ROL_CLIENTE_ID};
use obras_db::repositories::RolRepo;
use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify seed data.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    obras_db::health_check(&pool).await.unwrap();

    // Both lookup tables must exist and carry their seed rows.
    for table in ["roles", "estados_obra"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert!(count.0 > 0, "{table} should have seed data, got 0 rows");
    }
}

/// Seed ids must match the constants the code relies on.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_ids(pool: PgPool) {
    let cliente = RolRepo::find_by_nombre(&pool, ROL_CLIENTE)
        .await
        .unwrap()
        .expect("cliente role seeded");
    assert_eq!(cliente.id, ROL_CLIENTE_ID);

    let admin = RolRepo::find_by_nombre(&pool, ROL_ADMIN).await.unwrap();
    assert!(admin.is_some(), "admin role seeded");

    let (en_curso,): (i16,) = sqlx::query_as("SELECT id FROM estados_obra WHERE nombre = 'en_curso'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(en_curso, obras_core::estado::EstadoObra::EnCurso.id());

    let (finalizada,): (i16,) =
        sqlx::query_as("SELECT id FROM estados_obra WHERE nombre = 'finalizada'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(finalizada, obras_core::estado::EstadoObra::Finalizada.id());
}

/// A schema with every migration applied passes the startup check.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_check_migrations_passes_when_current(pool: PgPool) {
    obras_db::check_migrations(&pool).await.unwrap();
}

/// A database the migrator has never touched (no `_sqlx_migrations`
/// table) reports the first migration as pending instead of a raw
/// undefined-table error.
#[sqlx::test(migrations = false)]
async fn test_check_migrations_pending_on_empty_database(pool: PgPool) {
    let err = obras_db::check_migrations(&pool).await.unwrap_err();
    match err {
        obras_db::SchemaError::Pending { version } => assert_eq!(version, 20250612000000),
        other => panic!("expected a pending migration, got {other}"),
    }
}
