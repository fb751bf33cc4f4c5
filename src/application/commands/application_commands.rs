// src/application/commands/application_commands.rs
//
// Applying, reviewing applications, and interviews.

use tauri::State;

use crate::application::dto::ApplyDto;
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::application::view_state::ViewState;
use crate::domain::{
    ApplicationId, AttachmentKind, CalendarEvent, DownloadedFile, InterviewRequest, Job,
    JobApplication, JobId,
};

#[tauri::command]
pub async fn open_apply(job_id: JobId, state: State<'_, AppState>) -> Result<ViewState<Job>, String> {
    Ok(state.apply.open(job_id).await)
}

#[tauri::command]
pub async fn apply_to_job(
    job_id: JobId,
    form: ApplyDto,
    state: State<'_, AppState>,
) -> Result<(), String> {
    state.apply.submit(job_id, form.into()).await.to_error_response()
}

#[tauri::command]
pub async fn list_my_applications(
    state: State<'_, AppState>,
) -> Result<ViewState<Vec<JobApplication>>, String> {
    Ok(state.submitted_applications.load().await)
}

#[tauri::command]
pub async fn withdraw_application(
    application_id: ApplicationId,
    state: State<'_, AppState>,
) -> Result<(), String> {
    state
        .submitted_applications
        .withdraw(application_id)
        .await
        .to_error_response()
}

#[tauri::command]
pub async fn list_received_applications(
    state: State<'_, AppState>,
) -> Result<ViewState<Vec<JobApplication>>, String> {
    Ok(state.received_applications.load().await)
}

#[tauri::command]
pub async fn open_application(
    application_id: ApplicationId,
    state: State<'_, AppState>,
) -> Result<ViewState<JobApplication>, String> {
    Ok(state.application_detail.open(application_id).await)
}

/// Bytes and filename; saving the file is up to the web view
#[tauri::command]
pub async fn download_attachment(
    application_id: ApplicationId,
    kind: AttachmentKind,
    state: State<'_, AppState>,
) -> Result<DownloadedFile, String> {
    state
        .application_detail
        .download(application_id, kind)
        .await
        .to_error_response()
}

#[tauri::command]
pub async fn delete_application(
    application_id: ApplicationId,
    state: State<'_, AppState>,
) -> Result<(), String> {
    state
        .application_detail
        .delete(application_id)
        .await
        .to_error_response()
}

#[tauri::command]
pub async fn open_schedule_interview(
    application_id: ApplicationId,
    state: State<'_, AppState>,
) -> Result<ViewState<JobApplication>, String> {
    Ok(state.schedule_interview.open(application_id).await)
}

#[tauri::command]
pub async fn schedule_interview(
    application_id: ApplicationId,
    request: InterviewRequest,
    state: State<'_, AppState>,
) -> Result<(), String> {
    state
        .schedule_interview
        .submit(application_id, request)
        .await
        .to_error_response()
}

#[tauri::command]
pub async fn load_calendar(
    state: State<'_, AppState>,
) -> Result<ViewState<Vec<CalendarEvent>>, String> {
    Ok(state.interview_calendar.load().await)
}
