pub mod entity;
pub mod invariants;

pub use entity::{Job, JobDraft, JobId, JobType};
pub use invariants::{filter_jobs, validate_job_draft};
