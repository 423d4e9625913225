//! Progress-percentage rules for obras.
//!
//! Pure functions, no database access. The repository layer applies
//! these before touching `obras`/`historial_avance`, so every caller
//! (HTTP handler or test) gets identical validation.

use crate::error::CoreError;
use crate::estado::EstadoObra;

/// Inclusive percentage bounds for an obra's completion.
pub const PORCENTAJE_MIN: i32 = 0;
pub const PORCENTAJE_MAX: i32 = 100;

/// Validate that a completion percentage is within 0..=100.
pub fn validate_porcentaje(porcentaje: i32) -> Result<(), CoreError> {
    if !(PORCENTAJE_MIN..=PORCENTAJE_MAX).contains(&porcentaje) {
        return Err(CoreError::Validation(format!(
            "El porcentaje de avance debe estar entre {PORCENTAJE_MIN} y {PORCENTAJE_MAX}, se recibió {porcentaje}"
        )));
    }
    Ok(())
}

/// Resolve the percentage to store for an obra in the given state.
///
/// Whether a finished obra keeps its percentage is configurable
/// (`FINALIZADA_LIMPIA_PORCENTAJE`):
///
/// - en curso: the supplied percentage, defaulting to 0.
/// - finalizada with `limpiar_en_finalizada`: cleared (`None`).
/// - finalizada without it: the supplied percentage, kept as-is.
///
/// The supplied value must already have passed [`validate_porcentaje`].
pub fn porcentaje_para_estado(
    estado: EstadoObra,
    porcentaje: Option<i32>,
    limpiar_en_finalizada: bool,
) -> Option<i32> {
    match estado {
        EstadoObra::EnCurso => Some(porcentaje.unwrap_or(PORCENTAJE_MIN)),
        EstadoObra::Finalizada if limpiar_en_finalizada => None,
        EstadoObra::Finalizada => porcentaje,
    }
}

/// The `porcentaje_anterior` recorded in `historial_avance` when the
/// obra's stored percentage has been cleared.
pub fn porcentaje_anterior(stored: Option<i32>) -> i32 {
    stored.unwrap_or(PORCENTAJE_MIN)
}
