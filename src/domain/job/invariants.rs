use super::entity::{Job, JobDraft};
use crate::domain::{DomainError, DomainResult};

/// Validates a job form before it is posted
pub fn validate_job_draft(draft: &JobDraft) -> DomainResult<()> {
    require("job_title", &draft.job_title)?;
    require("job_description", &draft.job_description)?;
    require("job_location", &draft.job_location)?;
    require("company_name", &draft.company_name)?;
    Ok(())
}

fn require(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::field(field, "This field is required"));
    }
    Ok(())
}

/// Jobs whose title or category contains `term`, preserving order
pub fn filter_jobs<'a>(jobs: &'a [Job], term: &str) -> Vec<&'a Job> {
    jobs.iter().filter(|job| job.matches_search(term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::JobType;

    fn job(id: u64, title: &str, category: Option<&str>) -> Job {
        Job {
            id,
            employer_id: 1,
            job_title: title.to_string(),
            job_description: String::new(),
            job_location: String::new(),
            job_type: JobType::FullTime,
            salary: None,
            company_name: "Acme".to_string(),
            company_logo: None,
            category: category.map(str::to_string),
            created_at: None,
        }
    }

    #[test]
    fn test_filter_matches_title_or_category() {
        let jobs = vec![
            job(1, "Rust Engineer", Some("Engineering")),
            job(2, "Accountant", Some("Finance")),
            job(3, "Designer", None),
        ];

        let ids: Vec<u64> = filter_jobs(&jobs, "rust").iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1]);

        let ids: Vec<u64> = filter_jobs(&jobs, "FIN").iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![2]);

        assert_eq!(filter_jobs(&jobs, "  ").len(), 3);
    }

    #[test]
    fn test_draft_requires_title() {
        let draft = JobDraft {
            job_description: "d".to_string(),
            job_location: "l".to_string(),
            company_name: "c".to_string(),
            ..Default::default()
        };
        let err = validate_job_draft(&draft).unwrap_err();
        assert_eq!(err.to_string(), "job_title: This field is required");
    }

    #[test]
    fn test_salary_normalization() {
        let mut draft = JobDraft::default();
        draft.salary = Some("55000".to_string());
        assert_eq!(draft.normalized_salary(), Some(55000.0));

        draft.salary = Some("-1".to_string());
        assert_eq!(draft.normalized_salary(), None);

        draft.salary = Some("lots".to_string());
        assert_eq!(draft.normalized_salary(), None);
        assert!(draft.text_fields().iter().all(|(k, _)| *k != "salary"));
    }

    #[test]
    fn test_job_type_round_trip_keeps_unknown() {
        let t: JobType = serde_json::from_str("\"Seasonal\"").unwrap();
        assert_eq!(t, JobType::Other("Seasonal".to_string()));
        assert_eq!(serde_json::to_string(&JobType::PartTime).unwrap(), "\"Part-time\"");
    }
}
