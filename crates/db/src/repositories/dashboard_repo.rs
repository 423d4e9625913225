//! Aggregation queries backing the dashboard endpoint.

use sqlx::PgPool;

use crate::models::dashboard::{ObraResumenRow, ResumenObras};

/// Provides read-only aggregation over obras for the dashboard.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Obra totals per estado plus the average completion of obras en
    /// curso (NULL when none has a stored percentage).
    pub async fn resumen(pool: &PgPool) -> Result<ResumenObras, sqlx::Error> {
        sqlx::query_as::<_, ResumenObras>(
            "SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE estado_id = 1) AS en_curso,
                COUNT(*) FILTER (WHERE estado_id = 2) AS finalizadas,
                (AVG(porcentaje_avance) FILTER (WHERE estado_id = 1))::float8 AS avance_promedio
             FROM obras",
        )
        .fetch_one(pool)
        .await
    }

    /// Obra rows with client names resolved, newest first.
    pub async fn obras_con_cliente(pool: &PgPool) -> Result<Vec<ObraResumenRow>, sqlx::Error> {
        sqlx::query_as::<_, ObraResumenRow>(
            "SELECT o.id, o.nombre, o.estado_id, o.porcentaje_avance,
                    c.razon_social AS cliente
             FROM obras o
             LEFT JOIN clientes c ON c.id = o.cliente_id
             ORDER BY o.created_at DESC",
        )
        .fetch_all(pool)
        .await
    }
}
