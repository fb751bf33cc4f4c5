// src/domain/application.rs
//
// Job Application Entity
//
// An applicant's submission for a job: a required resume and an optional
// cover letter, both stored by the backend and fetched back as files.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::interview::Interview;
use crate::domain::job::{Job, JobId};
use crate::domain::user::{User, UserId};
use crate::domain::{DomainError, DomainResult};

pub type ApplicationId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: ApplicationId,

    pub job_id: JobId,

    /// Applicant
    pub user_id: UserId,

    #[serde(default)]
    pub resume_path: Option<String>,

    #[serde(default)]
    pub cover_letter_path: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub job: Option<Job>,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub interviews: Vec<Interview>,
}

impl JobApplication {
    /// Admins and the owner of the job may manage (schedule, review) this
    /// application. Without the embedded job only admins qualify.
    pub fn can_be_managed_by(&self, viewer: &User) -> bool {
        viewer.is_admin
            || self
                .job
                .as_ref()
                .map_or(false, |job| job.employer_id == viewer.id)
    }

    pub fn has_attachment(&self, kind: AttachmentKind) -> bool {
        match kind {
            AttachmentKind::Resume => self.resume_path.is_some(),
            AttachmentKind::CoverLetter => self.cover_letter_path.is_some(),
        }
    }
}

/// The two files attached to an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Resume,
    CoverLetter,
}

impl AttachmentKind {
    /// Download route segment
    pub fn path_segment(&self) -> &'static str {
        match self {
            AttachmentKind::Resume => "resume",
            AttachmentKind::CoverLetter => "cover-letter",
        }
    }

    /// Multipart field name on upload
    pub fn form_field(&self) -> &'static str {
        match self {
            AttachmentKind::Resume => "resume",
            AttachmentKind::CoverLetter => "cover_letter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttachmentKind::Resume => "resume",
            AttachmentKind::CoverLetter => "cover letter",
        }
    }
}

/// A file selected by the user for upload
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime_type: Option<String>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime_type: None,
        }
    }

    pub fn with_mime(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Apply form contents
#[derive(Debug, Clone, Default)]
pub struct ApplicationUpload {
    pub resume: Option<Attachment>,
    pub cover_letter: Option<Attachment>,
}

/// A resume is mandatory and must not be empty
pub fn validate_application_upload(upload: &ApplicationUpload) -> DomainResult<()> {
    match &upload.resume {
        None => Err(DomainError::field("resume", "Resume file is required.")),
        Some(file) if file.bytes.is_empty() => {
            Err(DomainError::field("resume", "Resume file is empty."))
        }
        Some(_) => Ok(()),
    }
}

/// A file fetched from an attachment route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl DownloadedFile {
    /// Name used when the server sends no filename hint
    pub fn fallback_name(kind: AttachmentKind, application_id: ApplicationId) -> String {
        format!("{}_application_{}.file", kind.path_segment(), application_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_required() {
        let upload = ApplicationUpload::default();
        let err = validate_application_upload(&upload).unwrap_err();
        assert_eq!(err.to_string(), "resume: Resume file is required.");

        let upload = ApplicationUpload {
            resume: Some(Attachment::new("cv.pdf", b"%PDF".to_vec())),
            cover_letter: None,
        };
        assert!(validate_application_upload(&upload).is_ok());
    }

    #[test]
    fn test_fallback_name() {
        assert_eq!(
            DownloadedFile::fallback_name(AttachmentKind::CoverLetter, 12),
            "cover-letter_application_12.file"
        );
    }

    #[test]
    fn test_application_deserializes_without_relations() {
        let app: JobApplication =
            serde_json::from_str(r#"{"id": 3, "job_id": 9, "user_id": 4}"#).unwrap();
        assert!(app.job.is_none());
        assert!(app.interviews.is_empty());
        assert!(!app.has_attachment(AttachmentKind::Resume));
    }
}
