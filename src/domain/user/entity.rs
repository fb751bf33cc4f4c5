use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::job::Job;
use crate::domain::serde_helpers::bool_lenient;

pub type UserId = u64;

/// A backend account, as returned by `/api/user` and `/api/users/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Storage-relative path or absolute URL
    #[serde(default)]
    pub profile_photo: Option<String>,

    #[serde(default, deserialize_with = "bool_lenient")]
    pub is_admin: bool,

    #[serde(default, deserialize_with = "bool_lenient")]
    pub is_employer: bool,

    /// Only populated on the user detail route
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_jobs: Option<Vec<Job>>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Admins and employers may post jobs and review applications.
    pub fn can_manage_jobs(&self) -> bool {
        self.is_admin || self.is_employer
    }

    /// Viewer may edit `other`'s profile
    pub fn can_edit_profile_of(&self, other: UserId) -> bool {
        self.is_admin || self.id == other
    }

    /// Viewer may edit a job owned by `employer_id`
    pub fn can_edit_job(&self, employer_id: UserId) -> bool {
        self.is_admin || self.id == employer_id
    }

    /// Case-insensitive name match, or substring match on the numeric id.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term.to_lowercase())
            || self.id.to_string().contains(term)
    }
}

/// Login form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    #[serde(default)]
    pub description: String,
}

/// Settings form. `profile_photo` carries raw file bytes and a filename.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub name: String,
    pub description: String,
    pub profile_photo: Option<crate::domain::Attachment>,
}
