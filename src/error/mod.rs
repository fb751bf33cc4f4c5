// src/error/mod.rs

pub mod types;

pub use types::{format_field_errors, AppError, AppResult, FieldErrors};
