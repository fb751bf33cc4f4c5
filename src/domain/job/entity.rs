use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::application::Attachment;
use crate::domain::serde_helpers::opt_f64_lenient;
use crate::domain::user::UserId;

pub type JobId = u64;

/// A job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,

    /// Owner of the posting
    pub employer_id: UserId,

    pub job_title: String,

    #[serde(default)]
    pub job_description: String,

    #[serde(default)]
    pub job_location: String,

    #[serde(default)]
    pub job_type: JobType,

    #[serde(default, deserialize_with = "opt_f64_lenient")]
    pub salary: Option<f64>,

    #[serde(default)]
    pub company_name: String,

    /// Storage-relative path or absolute URL
    #[serde(default)]
    pub company_logo: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Job {
    /// Case-insensitive match on title OR category.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.job_title.to_lowercase().contains(&needle)
            || self
                .category
                .as_deref()
                .map_or(false, |c| c.to_lowercase().contains(&needle))
    }
}

/// Employment type. Unknown values from the backend are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
    Other(String),
}

impl Default for JobType {
    fn default() -> Self {
        JobType::FullTime
    }
}

impl From<String> for JobType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Full-time" => JobType::FullTime,
            "Part-time" => JobType::PartTime,
            "Contract" => JobType::Contract,
            "Internship" => JobType::Internship,
            "Temporary" => JobType::Temporary,
            _ => JobType::Other(value),
        }
    }
}

impl From<JobType> for String {
    fn from(value: JobType) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobType::FullTime => write!(f, "Full-time"),
            JobType::PartTime => write!(f, "Part-time"),
            JobType::Contract => write!(f, "Contract"),
            JobType::Internship => write!(f, "Internship"),
            JobType::Temporary => write!(f, "Temporary"),
            JobType::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Form contents for posting or editing a job
#[derive(Debug, Clone, Default)]
pub struct JobDraft {
    pub job_title: String,
    pub job_description: String,
    pub job_location: String,
    pub job_type: JobType,
    /// Raw form input; see [`JobDraft::normalized_salary`]
    pub salary: Option<String>,
    pub company_name: String,
    pub category: String,
    pub company_logo: Option<Attachment>,
}

impl JobDraft {
    /// Pre-fill an edit form from an existing posting.
    pub fn from_job(job: &Job) -> Self {
        Self {
            job_title: job.job_title.clone(),
            job_description: job.job_description.clone(),
            job_location: job.job_location.clone(),
            job_type: job.job_type.clone(),
            salary: job.salary.map(|s| s.to_string()),
            company_name: job.company_name.clone(),
            category: job.category.clone().unwrap_or_default(),
            company_logo: None,
        }
    }

    /// Salary to submit. Unparseable or negative input is dropped rather
    /// than rejected.
    pub fn normalized_salary(&self) -> Option<f64> {
        self.salary
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v >= 0.0)
    }

    /// Text fields in submission order
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("job_title", self.job_title.clone()),
            ("job_description", self.job_description.clone()),
            ("job_location", self.job_location.clone()),
            ("job_type", self.job_type.to_string()),
            ("company_name", self.company_name.clone()),
            ("category", self.category.clone()),
        ];
        if let Some(salary) = self.normalized_salary() {
            fields.push(("salary", salary.to_string()));
        }
        fields
    }
}
