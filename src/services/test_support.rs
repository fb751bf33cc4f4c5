// src/services/test_support.rs
//
// Shared fixtures for service tests.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::{create_memory_pool, initialize_database};
use crate::domain::{Credentials, Job, JobApplication, JobType, User};
use crate::events::EventBus;
use crate::integrations::jobboard::MockJobBoardApi;
use crate::integrations::AuthResponse;
use crate::repositories::SqliteSessionRepository;
use crate::services::session_service::{SessionHandle, SessionService};

pub fn user(id: u64, name: &str) -> User {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
    }))
    .unwrap()
}

pub fn employer(id: u64, name: &str) -> User {
    User {
        is_employer: true,
        ..user(id, name)
    }
}

pub fn admin(id: u64, name: &str) -> User {
    User {
        is_admin: true,
        ..user(id, name)
    }
}

pub fn job(id: u64, employer_id: u64, title: &str) -> Job {
    Job {
        id,
        employer_id,
        job_title: title.to_string(),
        job_description: "Build things".to_string(),
        job_location: "Remote".to_string(),
        job_type: JobType::FullTime,
        salary: Some(1000.0),
        company_name: "Acme".to_string(),
        company_logo: None,
        category: Some("Engineering".to_string()),
        created_at: None,
    }
}

pub fn application(id: u64, applicant: u64, job: Option<Job>) -> JobApplication {
    JobApplication {
        id,
        job_id: job.as_ref().map_or(1, |j| j.id),
        user_id: applicant,
        resume_path: Some("resumes/cv.pdf".to_string()),
        cover_letter_path: None,
        created_at: None,
        job,
        user: None,
        interviews: Vec::new(),
    }
}

pub fn config() -> Arc<AppConfig> {
    Arc::new(AppConfig::default())
}

/// A session logged in as `who` (or logged out for `None`). Its backend
/// is a separate mock that only answers the login.
pub async fn session_as(who: Option<User>) -> Arc<SessionService> {
    let pool = Arc::new(create_memory_pool().unwrap());
    initialize_database(&pool.get().unwrap()).unwrap();

    let mut auth_api = MockJobBoardApi::new();
    if let Some(user) = who.clone() {
        auth_api.expect_login().returning(move |_| {
            Ok(AuthResponse {
                access_token: "test-token".to_string(),
                token_type: None,
                user: user.clone(),
            })
        });
    }

    let session = Arc::new(SessionService::new(
        SessionHandle::new(),
        Arc::new(SqliteSessionRepository::new(pool)),
        Arc::new(auth_api),
        Arc::new(EventBus::new()),
    ));

    if who.is_some() {
        session
            .login(Credentials {
                email: "someone@example.com".to_string(),
                password: "password".to_string(),
            })
            .await
            .unwrap();
    }

    session
}
