pub mod entity;
pub mod invariants;

pub use entity::Session;
pub use invariants::validate_session;
