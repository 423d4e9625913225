//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod cliente_repo;
pub mod dashboard_repo;
pub mod documento_repo;
pub mod historial_repo;
pub mod obra_repo;
pub mod rol_repo;
pub mod sesion_repo;
pub mod usuario_repo;

pub use cliente_repo::ClienteRepo;
pub use dashboard_repo::DashboardRepo;
pub use documento_repo::DocumentoObraRepo;
pub use historial_repo::HistorialAvanceRepo;
pub use obra_repo::ObraRepo;
pub use rol_repo::RolRepo;
pub use sesion_repo::SesionRepo;
pub use usuario_repo::UsuarioRepo;
