use super::entity::Session;
use crate::domain::{DomainError, DomainResult};

/// Session invariants:
///
/// 1. An identity never exists without a token
/// 2. A token is never an empty string
/// 3. A session with an identity is not loading
pub fn validate_session(session: &Session) -> DomainResult<()> {
    if session.user.is_some() && session.token.is_none() {
        return Err(DomainError::InvariantViolation(
            "Session has an identity but no token".to_string(),
        ));
    }
    if let Some(token) = &session.token {
        if token.trim().is_empty() {
            return Err(DomainError::InvariantViolation(
                "Session token cannot be empty".to_string(),
            ));
        }
    }
    if session.user.is_some() && session.loading {
        return Err(DomainError::InvalidStateTransition(
            "Session cannot be loading once an identity is established".to_string(),
        ));
    }
    Ok(())
}
