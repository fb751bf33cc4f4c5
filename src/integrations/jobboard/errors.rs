// src/integrations/jobboard/errors.rs
//
// Maps non-2xx responses onto AppError.

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{AppError, FieldErrors};

/// Pull a human message out of an error body (`message`, then `error`).
pub fn extract_message(body: &str) -> Option<String> {
    first_string(body, &["message", "error"])
}

/// Auth routes put the reason in `error`; prefer it over `message`.
pub fn extract_auth_error(body: &str) -> Option<String> {
    first_string(body, &["error", "message"])
}

fn first_string(body: &str, keys: &[&str]) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    keys.iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(str::to_string)
}

/// Parse a 422 body's `errors` object. Values may be a list of strings or
/// a single string.
pub fn extract_field_errors(body: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return errors;
    };
    let Some(fields) = value.get("errors").and_then(Value::as_object) else {
        return errors;
    };

    for (field, messages) in fields {
        let messages: Vec<String> = match messages {
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Value::String(msg) => vec![msg.clone()],
            _ => continue,
        };
        if !messages.is_empty() {
            errors.insert(field.clone(), messages);
        }
    }

    errors
}

pub fn classify(status: StatusCode, body: &str) -> AppError {
    let message = extract_message(body);

    match status {
        StatusCode::UNAUTHORIZED => AppError::Unauthorized,
        StatusCode::FORBIDDEN => {
            AppError::Forbidden(message.unwrap_or_else(|| "Forbidden".to_string()))
        }
        StatusCode::NOT_FOUND => AppError::NotFound,
        StatusCode::CONFLICT => {
            AppError::Conflict(message.unwrap_or_else(|| "Conflict".to_string()))
        }
        StatusCode::UNPROCESSABLE_ENTITY => {
            let errors = extract_field_errors(body);
            if errors.is_empty() {
                AppError::invalid(
                    "request",
                    message.unwrap_or_else(|| "The given data was invalid.".to_string()),
                )
            } else {
                AppError::Validation(errors)
            }
        }
        _ => AppError::Api {
            status: status.as_u16(),
            message: message.unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unexpected response")
                    .to_string()
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(classify(StatusCode::UNAUTHORIZED, "").is_unauthorized());
        assert!(matches!(classify(StatusCode::NOT_FOUND, "{}"), AppError::NotFound));

        match classify(StatusCode::FORBIDDEN, r#"{"message": "Admins only"}"#) {
            AppError::Forbidden(msg) => assert_eq!(msg, "Admins only"),
            other => panic!("unexpected: {:?}", other),
        }

        match classify(StatusCode::CONFLICT, r#"{"error": "Already applied"}"#) {
            AppError::Conflict(msg) => assert_eq!(msg, "Already applied"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_auth_error_prefers_error_key() {
        let body = r#"{"message": "Unauthenticated.", "error": "Invalid credentials"}"#;
        assert_eq!(extract_auth_error(body).as_deref(), Some("Invalid credentials"));
        assert_eq!(extract_message(body).as_deref(), Some("Unauthenticated."));
        assert_eq!(extract_auth_error(r#"{"error": "  "}"#), None);
    }

    #[test]
    fn test_validation_body() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {"email": ["The email has already been taken."], "name": "Required"}
        }"#;

        match classify(StatusCode::UNPROCESSABLE_ENTITY, body) {
            AppError::Validation(errors) => {
                assert_eq!(errors["email"], vec!["The email has already been taken."]);
                assert_eq!(errors["name"], vec!["Required"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_validation_without_field_errors() {
        match classify(StatusCode::UNPROCESSABLE_ENTITY, "not json") {
            AppError::Validation(errors) => assert!(errors.contains_key("request")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_other_status_keeps_message() {
        match classify(StatusCode::INTERNAL_SERVER_ERROR, r#"{"message": "boom"}"#) {
            AppError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected: {:?}", other),
        }

        match classify(StatusCode::BAD_GATEWAY, "") {
            AppError::Api { message, .. } => assert_eq!(message, "Bad Gateway"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
