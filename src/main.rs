// src/main.rs

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use tauri::{AppHandle, Emitter, Manager};

use jobboard::application::commands::*;
use jobboard::application::state::AppState;
use jobboard::config::AppConfig;
use jobboard::db::{
    create_connection_pool, get_connection, get_database_path, initialize_database,
    verify_database_integrity,
};
use jobboard::events::{
    ChatPollFailed, DomainEvent, EventBus, MessageSent, MessagesRefreshed, SessionCleared,
    SessionEstablished,
};

/// Re-emit a bus event to the web view under `name`.
fn forward<E>(bus: &EventBus, app: &AppHandle, name: &'static str)
where
    E: DomainEvent + Serialize + Clone + 'static,
{
    let app = app.clone();
    bus.subscribe::<E, _>(move |event| {
        if let Err(e) = app.emit(name, event.clone()) {
            log::warn!("Failed to forward {} to the web view: {}", name, e);
        }
    });
}

fn main() -> anyhow::Result<()> {
    // 1. CONFIGURATION & LOGGING
    let config = AppConfig::load().context("loading configuration")?;

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .try_init();

    // 2. SESSION STORE
    let db_path = match &config.database_path {
        Some(path) => path.clone(),
        None => get_database_path()?,
    };
    let pool = Arc::new(create_connection_pool(&db_path)?);
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn)?;
    }

    // 3. APPLICATION STATE
    let app_state = AppState::build(config, pool)?;
    log::info!("Jobboard starting against {}", app_state.config.api_root());

    // 4. TAURI BOOTSTRAP
    tauri::Builder::default()
        .manage(app_state)
        .setup(|app| {
            let handle = app.handle().clone();
            let state = app.state::<AppState>();

            forward::<SessionEstablished>(&state.event_bus, &handle, "session-established");
            forward::<SessionCleared>(&state.event_bus, &handle, "session-cleared");
            forward::<MessagesRefreshed>(&state.event_bus, &handle, "messages-refreshed");
            forward::<ChatPollFailed>(&state.event_bus, &handle, "chat-poll-failed");
            forward::<MessageSent>(&state.event_bus, &handle, "message-sent");

            // Revalidate the persisted token without blocking the window
            let session = Arc::clone(&state.session);
            tauri::async_runtime::spawn(async move {
                session.initialize().await;
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Session
            get_session,
            login,
            register,
            logout,
            leave_view,
            // Jobs
            list_jobs,
            search_jobs,
            open_job,
            post_job,
            open_job_editor,
            update_job,
            list_posted_jobs,
            // Applications & interviews
            open_apply,
            apply_to_job,
            list_my_applications,
            withdraw_application,
            list_received_applications,
            open_application,
            download_attachment,
            delete_application,
            open_schedule_interview,
            schedule_interview,
            load_calendar,
            // Users
            list_users,
            search_users,
            open_profile,
            update_profile,
            list_saved_jobs,
            request_employer_role,
            load_dashboard,
            // Chat
            list_conversations,
            select_conversation,
            get_message_window,
            send_message,
        ])
        .run(tauri::generate_context!())
        .context("running the desktop shell")?;

    Ok(())
}
