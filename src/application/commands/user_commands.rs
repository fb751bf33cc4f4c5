// src/application/commands/user_commands.rs

use tauri::State;

use crate::application::dto::ProfileFormDto;
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::application::view_state::ViewState;
use crate::domain::{Job, User, UserId};
use crate::services::{Dashboard, UserProfile};

#[tauri::command]
pub async fn list_users(state: State<'_, AppState>) -> Result<ViewState<Vec<User>>, String> {
    Ok(state.users.load().await)
}

#[tauri::command]
pub async fn search_users(
    term: String,
    state: State<'_, AppState>,
) -> Result<ViewState<Vec<User>>, String> {
    Ok(state.users.search(&term))
}

/// `user_id` omitted: the viewer's own profile
#[tauri::command]
pub async fn open_profile(
    user_id: Option<UserId>,
    state: State<'_, AppState>,
) -> Result<ViewState<UserProfile>, String> {
    Ok(state.user_profile.open(user_id).await)
}

#[tauri::command]
pub async fn update_profile(
    form: ProfileFormDto,
    state: State<'_, AppState>,
) -> Result<User, String> {
    state
        .user_settings
        .save(form.into())
        .await
        .to_error_response()
}

#[tauri::command]
pub async fn list_saved_jobs(state: State<'_, AppState>) -> Result<ViewState<Vec<Job>>, String> {
    Ok(state.saved_jobs.load().await)
}

#[tauri::command]
pub async fn request_employer_role(
    message: String,
    state: State<'_, AppState>,
) -> Result<String, String> {
    state
        .become_employer
        .submit(&message)
        .await
        .to_error_response()
}

#[tauri::command]
pub async fn load_dashboard(state: State<'_, AppState>) -> Result<ViewState<Dashboard>, String> {
    Ok(state.dashboard.load().await)
}
