// src/services/user_service.rs
//
// User Service - directory, profiles, settings and role requests

use std::sync::Arc;

use serde::Serialize;

use crate::config::AppConfig;
use crate::domain::{validate_profile_update, Job, ProfileUpdate, User, UserId};
use crate::error::{AppError, AppResult};
use crate::events::{EmployerRoleRequested, EventBus, ProfileUpdated};
use crate::integrations::JobBoardApi;
use crate::services::session_service::SessionService;

pub const ADMIN_REQUIRED_MESSAGE: &str = "You need admin privileges to view users.";
pub const EMPLOYER_REQUEST_SENT: &str =
    "Your request has been sent! We will get in touch with you soon.";

/// A profile together with whether the viewer may edit it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub user: User,
    pub can_edit: bool,
}

pub struct UserService {
    api: Arc<dyn JobBoardApi>,
    session: Arc<SessionService>,
    event_bus: Arc<EventBus>,
    config: Arc<AppConfig>,
}

impl UserService {
    pub fn new(
        api: Arc<dyn JobBoardApi>,
        session: Arc<SessionService>,
        event_bus: Arc<EventBus>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            api,
            session,
            event_bus,
            config,
        }
    }

    fn resolve_photo(&self, mut user: User) -> User {
        user.profile_photo = user
            .profile_photo
            .filter(|path| !path.is_empty())
            .map(|path| self.config.storage_url(&path));
        user
    }

    /// Admin-only user directory. The backend decides; a 403 carries a
    /// fixed explanation.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.session.require_user()?;
        match self.session.intercept(self.api.list_users()).await {
            Ok(users) => Ok(users.into_iter().map(|u| self.resolve_photo(u)).collect()),
            Err(AppError::Forbidden(_)) => {
                Err(AppError::Forbidden(ADMIN_REQUIRED_MESSAGE.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    /// `user_id` defaults to the current user.
    pub async fn get_profile(&self, user_id: Option<UserId>) -> AppResult<UserProfile> {
        let viewer = self.session.require_user()?;
        let target = user_id.unwrap_or(viewer.id);

        let user = self.session.intercept(self.api.get_user(target)).await?;
        let can_edit = viewer.can_edit_profile_of(user.id);

        Ok(UserProfile {
            user: self.resolve_photo(user),
            can_edit,
        })
    }

    /// Update the current user's own profile.
    pub async fn update_profile(&self, update: ProfileUpdate) -> AppResult<User> {
        let viewer = self.session.require_user()?;
        validate_profile_update(&update)?;

        let updated = self
            .session
            .intercept(self.api.update_user(viewer.id, &update)).await?;
        let updated = self.resolve_photo(updated);

        self.session.refresh_current_user(updated.clone());
        log::info!("Profile of user {} updated", updated.id);
        self.event_bus.emit(ProfileUpdated::new(updated.id));

        Ok(updated)
    }

    /// Jobs the current user has bookmarked
    pub async fn saved_jobs(&self) -> AppResult<Vec<Job>> {
        let viewer = self.session.require_user()?;
        let user = self.session.intercept(self.api.get_user(viewer.id)).await?;

        Ok(user
            .saved_jobs
            .unwrap_or_default()
            .into_iter()
            .map(|mut job| {
                job.company_logo = job
                    .company_logo
                    .filter(|path| !path.is_empty())
                    .map(|path| self.config.storage_url(&path));
                job
            })
            .collect())
    }

    /// Ask an admin for the employer role. Returns the confirmation to show.
    pub async fn request_employer_role(&self, message: &str) -> AppResult<String> {
        let viewer = self.session.require_user()?;
        if message.trim().is_empty() {
            return Err(AppError::invalid("message", "Please tell us about your company."));
        }

        let reply = self
            .session
            .intercept(self.api.request_employer_role(message.trim())).await?;
        self.event_bus.emit(EmployerRoleRequested::new(viewer.id));

        Ok(reply.unwrap_or_else(|| EMPLOYER_REQUEST_SENT.to_string()))
    }
}

/// Users whose name (case-insensitive) or id contains `term`
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    users.iter().filter(|u| u.matches_search(term)).collect()
}
