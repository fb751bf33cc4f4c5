// src/application/view_state.rs
//
// Per-view fetch state
//
// RULES:
// - A slot holds one ViewState and the key it was loaded for
// - begin() issues a ticket and moves to Loading
// - complete() applies a result ONLY if its ticket is still current
// - reset() (unmount) invalidates every outstanding ticket
// - In-flight requests are never aborted, their results are dropped

use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::application::view_error::ViewError;

/// What a view renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Errored(ViewError),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ViewError> {
        match self {
            ViewState::Errored(error) => Some(error),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewState<U> {
        match self {
            ViewState::Idle => ViewState::Idle,
            ViewState::Loading => ViewState::Loading,
            ViewState::Ready(value) => ViewState::Ready(f(value)),
            ViewState::Errored(error) => ViewState::Errored(error),
        }
    }
}

impl<T> From<Result<T, ViewError>> for ViewState<T> {
    fn from(result: Result<T, ViewError>) -> Self {
        match result {
            Ok(value) => ViewState::Ready(value),
            Err(error) => ViewState::Errored(error),
        }
    }
}

/// Generation stamp for one fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    generation: u64,
    key: K,
}

impl<K> Ticket<K> {
    pub fn key(&self) -> &K {
        &self.key
    }
}

struct SlotInner<K, T> {
    generation: u64,
    key: Option<K>,
    state: ViewState<T>,
}

pub struct ViewSlot<K, T> {
    inner: Mutex<SlotInner<K, T>>,
}

impl<K, T> ViewSlot<K, T>
where
    K: Clone + PartialEq,
    T: Clone,
{
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SlotInner {
                generation: 0,
                key: None,
                state: ViewState::Idle,
            }),
        }
    }

    /// Start a fetch for `key`. Any earlier ticket becomes stale.
    pub fn begin(&self, key: K) -> Ticket<K> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.generation += 1;
        inner.key = Some(key.clone());
        inner.state = ViewState::Loading;
        Ticket {
            generation: inner.generation,
            key,
        }
    }

    /// Apply a fetch result. Returns false (and changes nothing) when the
    /// ticket was superseded by a newer begin() or a reset().
    pub fn complete(&self, ticket: &Ticket<K>, result: Result<T, ViewError>) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if inner.generation != ticket.generation {
            log::debug!(
                "Dropping stale view result (ticket {}, current {})",
                ticket.generation,
                inner.generation
            );
            return false;
        }
        inner.state = result.into();
        true
    }

    pub fn is_current(&self, ticket: &Ticket<K>) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .generation
            == ticket.generation
    }

    pub fn reset(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.generation += 1;
        inner.key = None;
        inner.state = ViewState::Idle;
    }

    pub fn state(&self) -> ViewState<T> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .state
            .clone()
    }

    pub fn key(&self) -> Option<K> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .key
            .clone()
    }

    /// Edit loaded data in place (e.g. drop a deleted row). No-op unless Ready.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        match &mut inner.state {
            ViewState::Ready(value) => {
                f(value);
                true
            }
            _ => false,
        }
    }
}

impl<K, T> Default for ViewSlot<K, T>
where
    K: Clone + PartialEq,
    T: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_then_complete() {
        let slot: ViewSlot<u64, String> = ViewSlot::new();
        assert_eq!(slot.state(), ViewState::Idle);

        let ticket = slot.begin(1);
        assert!(slot.state().is_loading());
        assert_eq!(slot.key(), Some(1));

        assert!(slot.complete(&ticket, Ok("job 1".to_string())));
        assert_eq!(slot.state(), ViewState::Ready("job 1".to_string()));
    }

    #[test]
    fn test_stale_result_is_ignored() {
        let slot: ViewSlot<u64, String> = ViewSlot::new();

        let old = slot.begin(1);
        let new = slot.begin(2);

        // The fetch for id 1 answers last; it must not overwrite id 2
        assert!(slot.complete(&new, Ok("job 2".to_string())));
        assert!(!slot.complete(&old, Ok("job 1".to_string())));

        assert_eq!(slot.state().ready().map(String::as_str), Some("job 2"));
        assert_eq!(slot.key(), Some(2));
    }

    #[test]
    fn test_stale_result_ignored_while_newer_loading() {
        let slot: ViewSlot<u64, String> = ViewSlot::new();

        let old = slot.begin(1);
        let _new = slot.begin(2);
        assert!(!slot.complete(&old, Err(ViewError::NotFound("gone".to_string()))));

        assert!(slot.state().is_loading());
    }

    #[test]
    fn test_reset_invalidates_outstanding_ticket() {
        let slot: ViewSlot<(), Vec<u32>> = ViewSlot::new();

        let ticket = slot.begin(());
        slot.reset();

        assert!(!slot.is_current(&ticket));
        assert!(!slot.complete(&ticket, Ok(vec![1, 2])));
        assert_eq!(slot.state(), ViewState::Idle);
        assert_eq!(slot.key(), None);
    }

    #[test]
    fn test_update_only_when_ready() {
        let slot: ViewSlot<(), Vec<u32>> = ViewSlot::new();
        assert!(!slot.update(|v| v.clear()));

        let ticket = slot.begin(());
        slot.complete(&ticket, Ok(vec![1, 2, 3]));
        assert!(slot.update(|v| v.retain(|n| *n != 2)));

        assert_eq!(slot.state(), ViewState::Ready(vec![1, 3]));
    }

    #[test]
    fn test_serialized_shape() {
        let ready: ViewState<u32> = ViewState::Ready(7);
        let json = serde_json::to_value(&ready).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["data"], 7);

        let idle: ViewState<u32> = ViewState::Idle;
        assert_eq!(serde_json::to_value(&idle).unwrap()["status"], "idle");
    }
}
