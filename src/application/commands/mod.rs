// src/application/commands/mod.rs
//
// Tauri Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the web view and the views/services
// - Commands accept DTOs and ids, return ViewState or DTOs
// - Failures cross the boundary as serialized ErrorResponse
// - Commands NEVER contain business logic

pub mod application_commands;
pub mod chat_commands;
pub mod job_commands;
pub mod session_commands;
pub mod user_commands;

pub use application_commands::*;
pub use chat_commands::*;
pub use job_commands::*;
pub use session_commands::*;
pub use user_commands::*;
