pub mod entity;
pub mod invariants;

pub use entity::{Credentials, ProfileUpdate, Registration, User, UserId};
pub use invariants::{validate_credentials, validate_profile_update, validate_registration};
