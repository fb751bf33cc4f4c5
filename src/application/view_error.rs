// src/application/view_error.rs
//
// User-facing failure taxonomy for views.
//
// Each view carries an ErrorCopy with its own wording. The mapping from
// AppError is:
//   401                -> Unauthenticated (session already cleared, go to login)
//   403                -> PermissionDenied (view copy, else backend message)
//   404                -> NotFound (view copy)
//   422 / client-side  -> Validation (aggregated field messages)
//   409                -> Conflict (view copy, else backend message)
//   other 4xx          -> Generic (backend message)
//   5xx / network / IO -> Generic (view copy)

use serde::Serialize;

use crate::domain::DomainError;
use crate::error::{format_field_errors, AppError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ViewError {
    Unauthenticated,
    PermissionDenied(String),
    NotFound(String),
    Validation(String),
    Conflict(String),
    Generic(String),
}

impl ViewError {
    pub fn from_app_error(error: &AppError, copy: &ErrorCopy) -> Self {
        match error {
            AppError::Unauthorized => ViewError::Unauthenticated,

            AppError::Forbidden(message) => {
                let message = copy.forbidden.map_or_else(|| message.clone(), str::to_string);
                ViewError::PermissionDenied(message)
            }

            AppError::NotFound => {
                ViewError::NotFound(copy.not_found.unwrap_or(NOT_FOUND).to_string())
            }

            AppError::Validation(fields) => {
                ViewError::Validation(copy.with_validation_prefix(format_field_errors(fields)))
            }

            AppError::Domain(domain) => {
                ViewError::Validation(copy.with_validation_prefix(domain_message(domain)))
            }

            AppError::Conflict(message) => {
                let message = copy.conflict.map_or_else(|| message.clone(), str::to_string);
                ViewError::Conflict(message)
            }

            AppError::Api { status, message } if (400..500).contains(status) => {
                ViewError::Generic(message.clone())
            }

            other => {
                log::warn!("{}: {}", copy.generic, other);
                ViewError::Generic(copy.generic.to_string())
            }
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ViewError::Unauthenticated)
    }

    pub fn message(&self) -> &str {
        match self {
            ViewError::Unauthenticated => LOGIN_REQUIRED,
            ViewError::PermissionDenied(m)
            | ViewError::NotFound(m)
            | ViewError::Validation(m)
            | ViewError::Conflict(m)
            | ViewError::Generic(m) => m,
        }
    }
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

pub const LOGIN_REQUIRED: &str = "Please log in to continue.";
const NOT_FOUND: &str = "Not found.";

fn domain_message(error: &DomainError) -> String {
    match error {
        DomainError::InvalidField { message, .. } => message.clone(),
        DomainError::InvariantViolation(text) | DomainError::InvalidStateTransition(text) => {
            text.clone()
        }
    }
}

/// Wording a view shows for each failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCopy {
    pub generic: &'static str,
    pub not_found: Option<&'static str>,
    pub forbidden: Option<&'static str>,
    pub conflict: Option<&'static str>,
    pub validation_prefix: Option<&'static str>,
}

impl ErrorCopy {
    pub const fn new(generic: &'static str) -> Self {
        Self {
            generic,
            not_found: None,
            forbidden: None,
            conflict: None,
            validation_prefix: None,
        }
    }

    pub const fn not_found(mut self, message: &'static str) -> Self {
        self.not_found = Some(message);
        self
    }

    pub const fn forbidden(mut self, message: &'static str) -> Self {
        self.forbidden = Some(message);
        self
    }

    pub const fn conflict(mut self, message: &'static str) -> Self {
        self.conflict = Some(message);
        self
    }

    pub const fn validation_prefix(mut self, prefix: &'static str) -> Self {
        self.validation_prefix = Some(prefix);
        self
    }

    fn with_validation_prefix(&self, detail: String) -> String {
        match self.validation_prefix {
            Some(prefix) => format!("{}: {}", prefix, detail),
            None => detail,
        }
    }
}
