//! Obra lifecycle status, mapped to the `estados_obra` lookup table.
//!
//! Discriminants are 1-based and must match the seed order in
//! `20250701000000_create_clientes_obras.sql`. API payloads carry the
//! lowercase label (`"en_curso"` / `"finalizada"`), never the raw id;
//! earlier rewrites of this app spelled the status inconsistently, so
//! parsing is the single normalization point.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::EstadoId;

/// Obra lifecycle status.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoObra {
    EnCurso = 1,
    Finalizada = 2,
}

impl EstadoObra {
    /// Return the database lookup id.
    pub fn id(self) -> EstadoId {
        self as EstadoId
    }

    /// Map a database lookup id back to the enum.
    pub fn from_id(id: EstadoId) -> Option<Self> {
        match id {
            1 => Some(EstadoObra::EnCurso),
            2 => Some(EstadoObra::Finalizada),
            _ => None,
        }
    }

    /// The canonical label stored in `estados_obra.nombre`.
    pub fn label(self) -> &'static str {
        match self {
            EstadoObra::EnCurso => "en_curso",
            EstadoObra::Finalizada => "finalizada",
        }
    }

    /// Parse a status label from request input.
    ///
    /// Accepts the canonical snake_case labels plus the space-separated
    /// spelling that older data used.
    pub fn parse(label: &str) -> Result<Self, CoreError> {
        match label.trim().to_lowercase().as_str() {
            "en_curso" | "en curso" => Ok(EstadoObra::EnCurso),
            "finalizada" => Ok(EstadoObra::Finalizada),
            other => Err(CoreError::Validation(format!(
                "Estado de obra desconocido: '{other}' (se esperaba 'en_curso' o 'finalizada')"
            ))),
        }
    }
}

impl From<EstadoObra> for EstadoId {
    fn from(value: EstadoObra) -> Self {
        value as EstadoId
    }
}

impl std::fmt::Display for EstadoObra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
