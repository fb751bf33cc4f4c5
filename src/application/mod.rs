// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the services
// - Views own per-page fetch state and map failures to ViewError
// - Commands (desktop feature) are the boundary to the web view
// - It translates between DTOs and domain entities

pub mod dto;
pub mod error_handling;
pub mod state;
pub mod view_error;
pub mod view_state;
pub mod views;

#[cfg(feature = "desktop")]
pub mod commands;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
pub use view_error::{ErrorCopy, ViewError};
pub use view_state::{Ticket, ViewSlot, ViewState};
