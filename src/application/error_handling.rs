// src/application/error_handling.rs
//
// Error responses for the web view
//
// ARCHITECTURE:
// - Maps AppError / ViewError -> one JSON shape the UI can switch on
// - Never exposes internal details (SQL, file paths) to the UI
// - Logs what it hides

use serde::{Deserialize, Serialize};

use crate::application::view_error::ViewError;
use crate::error::{format_field_errors, AppError};
use crate::services::failure_message;

/// Standard error response for UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// No valid session; the UI routes to login (401)
    Unauthenticated,

    /// Logged in but not allowed (403)
    PermissionDenied,

    /// Resource not found (404)
    NotFound,

    /// Invalid input, client-side or 422
    Validation,

    /// Duplicate submission (409)
    Conflict,

    /// Local session storage failed
    Database,

    /// Backend unreachable or answered with an unexpected status
    Network,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Unauthorized => {
                Self::new(ErrorType::Unauthenticated, "Please log in to continue.", None)
            }

            AppError::Forbidden(message) => Self::new(ErrorType::PermissionDenied, message, None),

            AppError::NotFound => Self::new(ErrorType::NotFound, "Resource not found", None),

            AppError::Conflict(message) => Self::new(ErrorType::Conflict, message, None),

            AppError::Validation(fields) => Self::new(
                ErrorType::Validation,
                "Validation failed",
                Some(format_field_errors(&fields)),
            ),

            AppError::Domain(domain_error) => Self::new(
                ErrorType::Validation,
                "Validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::Api { status, message } => {
                log::warn!("Backend returned {}: {}", status, message);
                Self::new(ErrorType::Network, message, Some(format!("HTTP {}", status)))
            }

            AppError::Network(e) => {
                log::warn!("Network error: {}", e);
                Self::new(
                    ErrorType::Network,
                    "Could not reach the server. Please try again.",
                    None,
                )
            }

            AppError::Database(e) => {
                log::error!("Database error: {:?}", e);
                Self::new(
                    ErrorType::Database,
                    "Database operation failed",
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(e) => {
                log::error!("Connection pool error: {}", e);
                Self::new(ErrorType::Database, "Database connection failed", None)
            }

            AppError::Serialization(e) => {
                log::error!("Serialization error: {:?}", e);
                Self::new(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Io(e) => {
                log::error!("IO error: {:?}", e);
                Self::new(ErrorType::Internal, "File system operation failed", None)
            }

            AppError::Config(message) | AppError::Other(message) => {
                log::error!("{}", message);
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }

    /// Create error response from a view's failure
    pub fn from_view_error(error: ViewError) -> Self {
        let error_type = match &error {
            ViewError::Unauthenticated => ErrorType::Unauthenticated,
            ViewError::PermissionDenied(_) => ErrorType::PermissionDenied,
            ViewError::NotFound(_) => ErrorType::NotFound,
            ViewError::Validation(_) => ErrorType::Validation,
            ViewError::Conflict(_) => ErrorType::Conflict,
            ViewError::Generic(_) => ErrorType::Network,
        };
        Self::new(error_type, error.message(), None)
    }

    /// Failed login or registration; the message is shown inline on the form
    pub fn auth_failure(error: &AppError, fallback: &str) -> Self {
        let error_type = match error {
            AppError::Domain(_) | AppError::Validation(_) => ErrorType::Validation,
            AppError::Api { .. } | AppError::Unauthorized => ErrorType::Unauthenticated,
            _ => ErrorType::Network,
        };
        Self::new(error_type, failure_message(error, fallback), None)
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self::new(ErrorType::Validation, message, None)
    }

    /// Serialized form handed to the web view
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "Internal error".to_string())
    }
}

/// Helper trait to convert Results to serialized ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| ErrorResponse::from_app_error(e).to_json())
    }
}

impl<T> ToErrorResponse<T> for Result<T, ViewError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| ErrorResponse::from_view_error(e).to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Resource not found");
        assert!(!error.success);
    }

    #[test]
    fn test_unauthorized_routes_to_login() {
        let error = ErrorResponse::from_app_error(AppError::Unauthorized);
        assert_eq!(error.error_type, ErrorType::Unauthenticated);
    }

    #[test]
    fn test_validation_error() {
        let error = ErrorResponse::validation("Invalid input".to_string());
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "Invalid input");
    }

    #[test]
    fn test_database_details_hidden() {
        let error = ErrorResponse::from_app_error(AppError::Database(
            rusqlite::Error::InvalidQuery,
        ));
        assert_eq!(error.error_type, ErrorType::Database);
        assert_eq!(error.details.as_deref(), Some("Check logs for details"));
    }

    #[test]
    fn test_view_error_keeps_view_copy() {
        let error = ErrorResponse::from_view_error(ViewError::Conflict(
            "You have already applied for this job.".to_string(),
        ));
        assert_eq!(error.error_type, ErrorType::Conflict);
        assert_eq!(error.message, "You have already applied for this job.");
    }

    #[test]
    fn test_auth_failure_message() {
        let error = ErrorResponse::auth_failure(
            &AppError::Api {
                status: 401,
                message: "Invalid credentials".to_string(),
            },
            "Login failed",
        );
        assert_eq!(error.message, "Invalid credentials");

        let error = ErrorResponse::auth_failure(
            &AppError::Domain(DomainError::field("password", "Passwords do not match")),
            "Registration failed",
        );
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "password: Passwords do not match");
    }

    #[test]
    fn test_serialization() {
        let result: Result<(), ViewError> = Err(ViewError::Unauthenticated);
        let json = result.to_error_response().unwrap_err();
        assert!(json.contains("unauthenticated"));
        assert!(json.contains("\"success\":false"));
    }
}
