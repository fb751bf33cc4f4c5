// src/application/commands/session_commands.rs
//
// Login, registration, logout, and leaving views.

use tauri::State;

use crate::application::dto::SessionDto;
use crate::application::error_handling::ErrorResponse;
use crate::application::state::AppState;
use crate::domain::{Credentials, Registration};

#[tauri::command]
pub async fn get_session(state: State<'_, AppState>) -> Result<SessionDto, String> {
    Ok(state.session.snapshot().into())
}

#[tauri::command]
pub async fn login(
    email: String,
    password: String,
    state: State<'_, AppState>,
) -> Result<SessionDto, String> {
    state
        .session
        .login(Credentials { email, password })
        .await
        .map_err(|e| ErrorResponse::auth_failure(&e, "Login failed").to_json())?;

    Ok(state.session.snapshot().into())
}

#[tauri::command]
pub async fn register(
    registration: Registration,
    state: State<'_, AppState>,
) -> Result<SessionDto, String> {
    state
        .session
        .register(registration)
        .await
        .map_err(|e| ErrorResponse::auth_failure(&e, "Registration failed").to_json())?;

    Ok(state.session.snapshot().into())
}

/// Never fails; every view is reset.
#[tauri::command]
pub async fn logout(state: State<'_, AppState>) -> Result<SessionDto, String> {
    state.session.logout();
    state.unmount_all();
    Ok(state.session.snapshot().into())
}

/// The web view navigated away from `view`
#[tauri::command]
pub async fn leave_view(view: String, state: State<'_, AppState>) -> Result<(), String> {
    match view.as_str() {
        "jobs" => state.jobs_list.unmount(),
        "job" => state.job_detail.unmount(),
        "job-editor" => state.job_editor.unmount(),
        "apply" => state.apply.unmount(),
        "my-applications" => state.submitted_applications.unmount(),
        "received-applications" => state.received_applications.unmount(),
        "application" => state.application_detail.unmount(),
        "schedule-interview" => state.schedule_interview.unmount(),
        "calendar" => state.interview_calendar.unmount(),
        "users" => state.users.unmount(),
        "profile" => state.user_profile.unmount(),
        "saved-jobs" => state.saved_jobs.unmount(),
        "my-jobs" => state.user_jobs.unmount(),
        "dashboard" => state.dashboard.unmount(),
        "chat" => state.chat.unmount(),
        other => {
            return Err(ErrorResponse::validation(format!("Unknown view: {}", other)).to_json())
        }
    }
    Ok(())
}
