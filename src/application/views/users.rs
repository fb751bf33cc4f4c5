// src/application/views/users.rs
//
// User directory, profiles, settings and the employer-role request.

use std::sync::Arc;

use crate::application::view_error::{ErrorCopy, ViewError};
use crate::application::view_state::{ViewSlot, ViewState};
use crate::application::views::{load_into, settle};
use crate::domain::{Job, ProfileUpdate, User, UserId};
use crate::services::{filter_users, JobService, UserProfile, UserService};

// The service already turns a 403 into the admin-privileges message
const USERS_COPY: ErrorCopy = ErrorCopy::new("Failed to load users.");

const PROFILE_COPY: ErrorCopy =
    ErrorCopy::new("Error loading profile").not_found("User not found");

const SETTINGS_COPY: ErrorCopy = ErrorCopy::new("Failed to update profile. Please try again.");

const SAVED_COPY: ErrorCopy = ErrorCopy::new("Failed to load your saved jobs.");

const POSTED_COPY: ErrorCopy = ErrorCopy::new("Failed to load your posted jobs.");

const EMPLOYER_COPY: ErrorCopy = ErrorCopy::new("An error occurred. Please try again.");

pub struct UsersView {
    users: Arc<UserService>,
    slot: ViewSlot<(), Vec<User>>,
}

impl UsersView {
    pub fn new(users: Arc<UserService>) -> Self {
        Self {
            users,
            slot: ViewSlot::new(),
        }
    }

    pub async fn load(&self) -> ViewState<Vec<User>> {
        load_into(&self.slot, (), &USERS_COPY, self.users.list_users()).await
    }

    /// Loaded users whose name or id matches `term`
    pub fn search(&self, term: &str) -> ViewState<Vec<User>> {
        self.slot
            .state()
            .map(|users| filter_users(&users, term).into_iter().cloned().collect())
    }

    pub fn unmount(&self) {
        self.slot.reset();
    }
}

/// Keyed by the requested id; `None` is the viewer's own profile.
pub struct UserProfileView {
    users: Arc<UserService>,
    slot: ViewSlot<Option<UserId>, UserProfile>,
}

impl UserProfileView {
    pub fn new(users: Arc<UserService>) -> Self {
        Self {
            users,
            slot: ViewSlot::new(),
        }
    }

    pub async fn open(&self, user_id: Option<UserId>) -> ViewState<UserProfile> {
        load_into(
            &self.slot,
            user_id,
            &PROFILE_COPY,
            self.users.get_profile(user_id),
        )
        .await
    }

    pub fn unmount(&self) {
        self.slot.reset();
    }
}

pub struct UserSettingsView {
    users: Arc<UserService>,
}

impl UserSettingsView {
    pub fn new(users: Arc<UserService>) -> Self {
        Self { users }
    }

    pub async fn save(&self, update: ProfileUpdate) -> Result<User, ViewError> {
        settle(self.users.update_profile(update).await, &SETTINGS_COPY)
    }
}

pub struct SavedJobsView {
    users: Arc<UserService>,
    slot: ViewSlot<(), Vec<Job>>,
}

impl SavedJobsView {
    pub fn new(users: Arc<UserService>) -> Self {
        Self {
            users,
            slot: ViewSlot::new(),
        }
    }

    pub async fn load(&self) -> ViewState<Vec<Job>> {
        load_into(&self.slot, (), &SAVED_COPY, self.users.saved_jobs()).await
    }

    pub fn unmount(&self) {
        self.slot.reset();
    }
}

/// Jobs posted by the current user
pub struct UserJobsView {
    jobs: Arc<JobService>,
    slot: ViewSlot<(), Vec<Job>>,
}

impl UserJobsView {
    pub fn new(jobs: Arc<JobService>) -> Self {
        Self {
            jobs,
            slot: ViewSlot::new(),
        }
    }

    pub async fn load(&self) -> ViewState<Vec<Job>> {
        load_into(&self.slot, (), &POSTED_COPY, self.jobs.posted_jobs()).await
    }

    pub fn unmount(&self) {
        self.slot.reset();
    }
}

pub struct BecomeEmployerView {
    users: Arc<UserService>,
}

impl BecomeEmployerView {
    pub fn new(users: Arc<UserService>) -> Self {
        Self { users }
    }

    /// Returns the confirmation text to display.
    pub async fn submit(&self, message: &str) -> Result<String, ViewError> {
        settle(
            self.users.request_employer_role(message).await,
            &EMPLOYER_COPY,
        )
    }
}
