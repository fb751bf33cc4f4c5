use chrono::{DateTime, NaiveDateTime};

use super::entity::InterviewRequest;
use crate::domain::{DomainError, DomainResult};

/// Formats accepted for `scheduled_at`, besides RFC 3339.
/// The second is what a `datetime-local` input produces.
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a backend or form timestamp. RFC 3339 values are converted to UTC.
pub fn parse_scheduled_at(raw: &str) -> DomainResult<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| {
            DomainError::field("scheduled_at", format!("Unrecognized date/time: {}", raw))
        })
}

/// Both fields are required and the time must parse
pub fn validate_interview_request(request: &InterviewRequest) -> DomainResult<()> {
    if request.title.trim().is_empty() || request.scheduled_at.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Please provide both a title and a date/time.".to_string(),
        ));
    }
    parse_scheduled_at(&request.scheduled_at)?;
    Ok(())
}
