// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are what the web view sends and receives
// - Entities that are already plain data (Job, User, ...) are sent as-is
// - Form DTOs convert INTO domain drafts; no validation happens here

use serde::{Deserialize, Serialize};

use crate::domain::{
    ApplicationUpload, Attachment, Job, JobDraft, JobType, ProfileUpdate, Session, User,
};

// ============================================================================
// SESSION
// ============================================================================

/// Session as the UI sees it. The token never leaves the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDto {
    pub user: Option<User>,
    pub authenticated: bool,
    pub loading: bool,
    pub last_error: Option<String>,
}

impl From<Session> for SessionDto {
    fn from(session: Session) -> Self {
        Self {
            authenticated: session.is_authenticated(),
            user: session.user,
            loading: session.loading,
            last_error: session.last_error,
        }
    }
}

// ============================================================================
// FILES
// ============================================================================

/// A file picked in the web view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDto {
    pub file_name: String,
    pub bytes: Vec<u8>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

impl From<FileDto> for Attachment {
    fn from(dto: FileDto) -> Self {
        let attachment = Attachment::new(dto.file_name, dto.bytes);
        match dto.mime_type {
            Some(mime) if !mime.is_empty() => attachment.with_mime(mime),
            _ => attachment,
        }
    }
}

// ============================================================================
// JOB FORM
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFormDto {
    pub job_title: String,
    pub job_description: String,
    pub job_location: String,
    pub job_type: String,
    #[serde(default)]
    pub salary: Option<String>,
    pub company_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub company_logo: Option<FileDto>,
}

impl From<JobFormDto> for JobDraft {
    fn from(dto: JobFormDto) -> Self {
        JobDraft {
            job_title: dto.job_title,
            job_description: dto.job_description,
            job_location: dto.job_location,
            job_type: JobType::from(dto.job_type),
            salary: dto.salary,
            company_name: dto.company_name,
            category: dto.category,
            company_logo: dto.company_logo.map(Attachment::from),
        }
    }
}

/// Pre-fill for the edit form
impl From<&Job> for JobFormDto {
    fn from(job: &Job) -> Self {
        let draft = JobDraft::from_job(job);
        Self {
            job_title: draft.job_title,
            job_description: draft.job_description,
            job_location: draft.job_location,
            job_type: draft.job_type.to_string(),
            salary: draft.salary,
            company_name: draft.company_name,
            category: draft.category,
            company_logo: None,
        }
    }
}

// ============================================================================
// APPLY FORM
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplyDto {
    #[serde(default)]
    pub resume: Option<FileDto>,
    #[serde(default)]
    pub cover_letter: Option<FileDto>,
}

impl From<ApplyDto> for ApplicationUpload {
    fn from(dto: ApplyDto) -> Self {
        ApplicationUpload {
            resume: dto.resume.map(Attachment::from),
            cover_letter: dto.cover_letter.map(Attachment::from),
        }
    }
}

// ============================================================================
// SETTINGS FORM
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileFormDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub profile_photo: Option<FileDto>,
}

impl From<ProfileFormDto> for ProfileUpdate {
    fn from(dto: ProfileFormDto) -> Self {
        ProfileUpdate {
            name: dto.name,
            description: dto.description,
            profile_photo: dto.profile_photo.map(Attachment::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_dto_hides_token() {
        let session = Session::pending("secret".to_string());
        let json = serde_json::to_string(&SessionDto::from(session)).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"loading\":true"));
    }

    #[test]
    fn test_job_form_into_draft() {
        let dto: JobFormDto = serde_json::from_value(serde_json::json!({
            "job_title": "Rust Engineer",
            "job_description": "Systems work",
            "job_location": "Remote",
            "job_type": "Part-time",
            "salary": "4200",
            "company_name": "Acme",
            "company_logo": {"file_name": "logo.png", "bytes": [1, 2], "mime_type": "image/png"}
        }))
        .unwrap();

        let draft = JobDraft::from(dto);
        assert_eq!(draft.job_type, JobType::PartTime);
        assert_eq!(draft.normalized_salary(), Some(4200.0));
        assert_eq!(
            draft.company_logo.and_then(|logo| logo.mime_type).as_deref(),
            Some("image/png")
        );
    }

    #[test]
    fn test_empty_mime_ignored() {
        let attachment = Attachment::from(FileDto {
            file_name: "cv.pdf".to_string(),
            bytes: vec![1],
            mime_type: Some(String::new()),
        });
        assert!(attachment.mime_type.is_none());
    }
}
