//! Well-known role name constants.
//!
//! These must match the seed data in `20250612000000_create_usuarios.sql`.

pub const ROL_ADMIN: &str = "admin";
pub const ROL_CLIENTE: &str = "cliente";

/// Database id of the default role assigned at registration.
pub const ROL_CLIENTE_ID: i64 = 2;
