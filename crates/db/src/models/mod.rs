//! Database entity models and DTOs, one module per table.

pub mod cliente;
pub mod dashboard;
pub mod documento;
pub mod historial;
pub mod obra;
pub mod rol;
pub mod sesion;
pub mod usuario;
