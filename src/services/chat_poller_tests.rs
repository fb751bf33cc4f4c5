// src/services/chat_poller_tests.rs
//
// Polling lifecycle: immediate fetch, periodic refresh, and teardown on
// selection change, stop and drop.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use crate::domain::Message;
    use crate::error::AppError;
    use crate::events::EventBus;
    use crate::integrations::jobboard::MockJobBoardApi;
    use crate::services::chat_poller::{ChatPoller, LOAD_MESSAGES_FAILED};
    use crate::services::chat_service::ChatService;
    use crate::services::test_support::*;
    use crate::services::SessionService;

    const TICK: Duration = Duration::from_millis(20);

    fn message(id: u64, conversation_id: u64, body: &str) -> Message {
        Message {
            id,
            conversation_id: Some(conversation_id),
            user_id: 1,
            body: body.to_string(),
            created_at: None,
            user: None,
        }
    }

    fn poller(
        api: MockJobBoardApi,
        session: Arc<SessionService>,
    ) -> (ChatPoller, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        let chat = Arc::new(ChatService::new(Arc::new(api), session, bus.clone()));
        (ChatPoller::new(chat, bus.clone(), TICK), bus)
    }

    /// Mock whose `messages` counts calls per conversation (1 and 2)
    fn counting_api() -> (MockJobBoardApi, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let (f, s) = (first.clone(), second.clone());

        let mut api = MockJobBoardApi::new();
        api.expect_messages().returning(move |id| {
            if id == 1 {
                f.fetch_add(1, Ordering::SeqCst);
            } else {
                s.fetch_add(1, Ordering::SeqCst);
            }
            Ok(vec![message(id * 100, id, "hello")])
        });

        (api, first, second)
    }

    #[tokio::test]
    async fn test_fetches_immediately_then_periodically() {
        let (api, first, _) = counting_api();
        let (poller, bus) = poller(api, session_as(Some(user(1, "Me"))).await);

        poller.select(Some(1));
        assert!(poller.snapshot().loading);

        tokio::time::sleep(TICK / 2).await;
        assert_eq!(first.load(Ordering::SeqCst), 1);

        let window = poller.snapshot();
        assert_eq!(window.conversation_id, Some(1));
        assert_eq!(window.messages.len(), 1);
        assert!(!window.loading);

        tokio::time::sleep(TICK * 3).await;
        assert!(first.load(Ordering::SeqCst) >= 3);
        assert!(bus.emitted_count("MessagesRefreshed") >= 3);
        assert!(poller.is_polling());
    }

    #[tokio::test]
    async fn test_selection_change_stops_previous_polling() {
        let (api, first, second) = counting_api();
        let (poller, _) = poller(api, session_as(Some(user(1, "Me"))).await);

        poller.select(Some(1));
        tokio::time::sleep(TICK * 2).await;

        poller.select(Some(2));
        let first_calls = first.load(Ordering::SeqCst);
        assert!(first_calls >= 1);

        // Messages of the old conversation are gone straight away
        assert!(poller.snapshot().messages.is_empty());

        tokio::time::sleep(TICK * 4).await;
        assert_eq!(first.load(Ordering::SeqCst), first_calls);
        assert!(second.load(Ordering::SeqCst) >= 2);
        assert_eq!(poller.snapshot().messages[0].id, 200);
    }

    #[tokio::test]
    async fn test_stop_and_drop_end_polling() {
        let (api, first, _) = counting_api();
        let (poller, _) = poller(api, session_as(Some(user(1, "Me"))).await);

        poller.select(Some(1));
        tokio::time::sleep(TICK).await;
        poller.stop();

        let calls = first.load(Ordering::SeqCst);
        assert_eq!(poller.snapshot().conversation_id, None);
        assert!(!poller.is_polling());

        tokio::time::sleep(TICK * 3).await;
        assert_eq!(first.load(Ordering::SeqCst), calls);

        poller.select(Some(1));
        tokio::time::sleep(TICK).await;
        drop(poller);

        let calls = first.load(Ordering::SeqCst);
        tokio::time::sleep(TICK * 3).await;
        assert_eq!(first.load(Ordering::SeqCst), calls);
    }

    #[tokio::test]
    async fn test_failures_are_reported_and_polling_continues() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut api = MockJobBoardApi::new();
        api.expect_messages().returning(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(AppError::Api {
                status: 500,
                message: "Server Error".to_string(),
            })
        });

        let (poller, bus) = poller(api, session_as(Some(user(1, "Me"))).await);
        poller.select(Some(1));
        tokio::time::sleep(TICK * 3).await;

        assert!(calls.load(Ordering::SeqCst) >= 2);
        assert_eq!(poller.snapshot().error.as_deref(), Some(LOAD_MESSAGES_FAILED));
        assert!(bus.emitted_count("ChatPollFailed") >= 2);
        assert!(poller.is_polling());
    }

    #[tokio::test]
    async fn test_unauthorized_ends_polling_and_session() {
        let mut api = MockJobBoardApi::new();
        api.expect_messages()
            .times(1)
            .returning(|_| Err(AppError::Unauthorized));

        let session = session_as(Some(user(1, "Me"))).await;
        let (poller, _) = poller(api, session.clone());

        poller.select(Some(1));
        tokio::time::sleep(TICK * 3).await;

        assert!(!poller.is_polling());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_append_sent_only_to_visible_conversation() {
        let (api, _, _) = counting_api();
        let (poller, _) = poller(api, session_as(Some(user(1, "Me"))).await);

        poller.select(Some(1));
        tokio::time::sleep(TICK / 2).await;

        poller.append_sent(1, message(101, 1, "mine"));
        poller.append_sent(1, message(101, 1, "mine"));
        poller.append_sent(2, message(201, 2, "elsewhere"));

        let ids: Vec<u64> = poller.snapshot().messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![100, 101]);
    }

    #[tokio::test]
    async fn test_zero_interval_uses_default() {
        let (api, first, _) = counting_api();
        let bus = Arc::new(EventBus::new());
        let session = session_as(Some(user(1, "Me"))).await;
        let chat = Arc::new(ChatService::new(Arc::new(api), session, bus.clone()));
        let poller = ChatPoller::new(chat, bus, Duration::ZERO);

        assert_eq!(poller.interval(), Duration::from_millis(5000));

        poller.select(Some(1));
        tokio::time::sleep(TICK * 3).await;

        // Only the immediate fetch; the next tick is seconds away
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert!(poller.is_polling());
        poller.stop();
    }
}
