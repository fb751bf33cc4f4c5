// src/application/commands/chat_commands.rs
//
// Message refreshes reach the web view as `messages-refreshed` events;
// these commands only change the selection and send.

use tauri::State;

use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::application::view_state::ViewState;
use crate::domain::{Conversation, ConversationId, Message};
use crate::services::MessageWindow;

#[tauri::command]
pub async fn list_conversations(
    state: State<'_, AppState>,
) -> Result<ViewState<Vec<Conversation>>, String> {
    Ok(state.chat.load_conversations().await)
}

#[tauri::command]
pub async fn select_conversation(
    conversation_id: Option<ConversationId>,
    state: State<'_, AppState>,
) -> Result<MessageWindow, String> {
    Ok(state.chat.select(conversation_id))
}

#[tauri::command]
pub async fn get_message_window(state: State<'_, AppState>) -> Result<MessageWindow, String> {
    Ok(state.chat.window())
}

#[tauri::command]
pub async fn send_message(body: String, state: State<'_, AppState>) -> Result<Message, String> {
    state.chat.send(&body).await.to_error_response()
}
