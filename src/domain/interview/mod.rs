pub mod entity;
pub mod invariants;

pub use entity::{CalendarEvent, Interview, InterviewId, InterviewRequest};
pub use invariants::{parse_scheduled_at, validate_interview_request};
