use super::entity::{Credentials, ProfileUpdate, Registration};
use crate::domain::{DomainError, DomainResult};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Login requires both fields
pub fn validate_credentials(credentials: &Credentials) -> DomainResult<()> {
    if credentials.email.trim().is_empty() {
        return Err(DomainError::field("email", "Email is required"));
    }
    if credentials.password.is_empty() {
        return Err(DomainError::field("password", "Password is required"));
    }
    Ok(())
}

/// Registration rules checked before the form is sent
pub fn validate_registration(registration: &Registration) -> DomainResult<()> {
    if registration.name.trim().is_empty() {
        return Err(DomainError::field("name", "Name is required"));
    }
    validate_email(&registration.email)?;
    if registration.password != registration.password_confirmation {
        return Err(DomainError::field("password", "Passwords do not match"));
    }
    if registration.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::field(
            "password",
            format!("Password must be at least {} characters long", MIN_PASSWORD_LEN),
        ));
    }
    Ok(())
}

pub fn validate_profile_update(update: &ProfileUpdate) -> DomainResult<()> {
    if update.name.trim().is_empty() {
        return Err(DomainError::field("name", "Name is required"));
    }
    Ok(())
}

fn validate_email(email: &str) -> DomainResult<()> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(DomainError::field("email", "A valid email address is required")),
    }
}
