// src/services/chat_poller.rs
//
// Chat Poller - keeps the selected conversation's messages fresh
//
// CRITICAL RULES:
// - At most ONE poll task exists at a time
// - Fetches immediately on selection, then every `interval`
// - Changing the selection, stop() and Drop abort the task and bump the
//   generation; a response that lands afterwards is discarded
// - A failed fetch is reported and polling continues; a 401 ends it
// - Events are emitted outside the state lock

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::config::DEFAULT_POLL_INTERVAL_MS;
use crate::domain::{ConversationId, Message};
use crate::events::{ChatPollFailed, EventBus, MessagesRefreshed};
use crate::services::chat_service::ChatService;

pub const LOAD_MESSAGES_FAILED: &str = "Failed to load messages.";

/// What the message window shows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageWindow {
    pub conversation_id: Option<ConversationId>,
    pub messages: Vec<Message>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Default)]
struct PollState {
    generation: u64,
    window: MessageWindow,
}

pub struct ChatPoller {
    chat: Arc<ChatService>,
    event_bus: Arc<EventBus>,
    interval: Duration,
    state: Arc<Mutex<PollState>>,
    task_handle: Mutex<Option<JoinHandle<()>>>,
}

impl ChatPoller {
    /// A zero `interval` falls back to the default poll interval.
    pub fn new(chat: Arc<ChatService>, event_bus: Arc<EventBus>, interval: Duration) -> Self {
        let interval = if interval.is_zero() {
            log::warn!("Chat poll interval of zero; using the default");
            Duration::from_millis(DEFAULT_POLL_INTERVAL_MS)
        } else {
            interval
        };

        Self {
            chat,
            event_bus,
            interval,
            state: Arc::new(Mutex::new(PollState::default())),
            task_handle: Mutex::new(None),
        }
    }

    /// Switch the message window to `conversation`, or clear it with `None`.
    ///
    /// Must be called from within a tokio runtime when selecting.
    pub fn select(&self, conversation: Option<ConversationId>) {
        self.abort_task();

        let generation = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.generation += 1;
            state.window = MessageWindow {
                conversation_id: conversation,
                messages: Vec::new(),
                loading: conversation.is_some(),
                error: None,
            };
            state.generation
        };

        if let Some(conversation_id) = conversation {
            log::debug!("Polling conversation {} every {:?}", conversation_id, self.interval);
            self.spawn_poll_task(conversation_id, generation);
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn stop(&self) {
        self.select(None);
    }

    pub fn selected(&self) -> Option<ConversationId> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .window
            .conversation_id
    }

    pub fn snapshot(&self) -> MessageWindow {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .window
            .clone()
    }

    pub fn is_polling(&self) -> bool {
        self.task_handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map_or(false, |task| !task.is_finished())
    }

    /// Append a message this client just sent, if its conversation is
    /// still the one on screen.
    pub fn append_sent(&self, conversation_id: ConversationId, message: Message) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let window = &mut state.window;
        if window.conversation_id != Some(conversation_id) {
            return;
        }
        if !window.messages.iter().any(|m| m.id == message.id) {
            window.messages.push(message);
        }
    }

    /// Show a send failure in the window without dropping its messages.
    pub fn report_error(&self, conversation_id: ConversationId, message: &str) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.window.conversation_id == Some(conversation_id) {
            state.window.error = Some(message.to_string());
        }
    }

    fn abort_task(&self) {
        let mut handle = self
            .task_handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = handle.take() {
            task.abort();
        }
    }

    fn spawn_poll_task(&self, conversation_id: ConversationId, generation: u64) {
        let chat = Arc::clone(&self.chat);
        let event_bus = Arc::clone(&self.event_bus);
        let state = Arc::clone(&self.state);
        let interval = self.interval;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                // First tick completes immediately
                ticker.tick().await;

                let result = chat.messages(conversation_id).await;
                let unauthorized = matches!(&result, Err(e) if e.is_unauthorized());

                let event = {
                    let mut guard = state.lock().unwrap_or_else(PoisonError::into_inner);
                    if guard.generation != generation {
                        break;
                    }
                    let window = &mut guard.window;
                    window.loading = false;

                    match result {
                        Ok(messages) => {
                            window.messages = messages.clone();
                            window.error = None;
                            Ok(messages)
                        }
                        Err(e) => {
                            log::warn!("Polling conversation {} failed: {}", conversation_id, e);
                            window.error = Some(LOAD_MESSAGES_FAILED.to_string());
                            Err(e.to_string())
                        }
                    }
                };

                match event {
                    Ok(messages) => event_bus.emit(MessagesRefreshed::new(conversation_id, messages)),
                    Err(message) => event_bus.emit(ChatPollFailed::new(conversation_id, message)),
                }

                if unauthorized {
                    log::info!("Session ended; polling of conversation {} stopped", conversation_id);
                    break;
                }
            }
        });

        let mut handle = self
            .task_handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *handle = Some(task);
    }
}

impl Drop for ChatPoller {
    fn drop(&mut self) {
        self.abort_task();
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.generation += 1;
    }
}
