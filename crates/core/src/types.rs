/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// IDs of the SMALLINT lookup tables (`estados_obra`).
pub type EstadoId = i16;
