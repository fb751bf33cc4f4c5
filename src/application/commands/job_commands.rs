// src/application/commands/job_commands.rs

use tauri::State;

use crate::application::dto::JobFormDto;
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::application::view_state::ViewState;
use crate::domain::{Job, JobId};

#[tauri::command]
pub async fn list_jobs(state: State<'_, AppState>) -> Result<ViewState<Vec<Job>>, String> {
    Ok(state.jobs_list.load().await)
}

/// Filters the already loaded list
#[tauri::command]
pub async fn search_jobs(
    term: String,
    state: State<'_, AppState>,
) -> Result<ViewState<Vec<Job>>, String> {
    Ok(state.jobs_list.search(&term))
}

#[tauri::command]
pub async fn open_job(job_id: JobId, state: State<'_, AppState>) -> Result<ViewState<Job>, String> {
    Ok(state.job_detail.open(job_id).await)
}

#[tauri::command]
pub async fn post_job(form: JobFormDto, state: State<'_, AppState>) -> Result<Job, String> {
    state.job_editor.post(form.into()).await.to_error_response()
}

/// Edit form contents for a job the viewer may edit
#[tauri::command]
pub async fn open_job_editor(
    job_id: JobId,
    state: State<'_, AppState>,
) -> Result<ViewState<JobFormDto>, String> {
    Ok(state
        .job_editor
        .open(job_id)
        .await
        .map(|job| JobFormDto::from(&job)))
}

#[tauri::command]
pub async fn update_job(
    job_id: JobId,
    form: JobFormDto,
    state: State<'_, AppState>,
) -> Result<Job, String> {
    state
        .job_editor
        .save(job_id, form.into())
        .await
        .to_error_response()
}

#[tauri::command]
pub async fn list_posted_jobs(state: State<'_, AppState>) -> Result<ViewState<Vec<Job>>, String> {
    Ok(state.user_jobs.load().await)
}
