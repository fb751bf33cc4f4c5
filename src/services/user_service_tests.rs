// src/services/user_service_tests.rs

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::domain::{Attachment, ProfileUpdate};
    use crate::error::AppError;
    use crate::events::EventBus;
    use crate::integrations::jobboard::MockJobBoardApi;
    use crate::services::test_support::*;
    use crate::services::user_service::{
        filter_users, UserService, ADMIN_REQUIRED_MESSAGE, EMPLOYER_REQUEST_SENT,
    };
    use crate::services::SessionService;

    fn build(api: MockJobBoardApi, session: Arc<SessionService>) -> (UserService, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        (
            UserService::new(Arc::new(api), session, bus.clone(), config()),
            bus,
        )
    }

    #[tokio::test]
    async fn test_forbidden_listing_has_admin_message() {
        let mut api = MockJobBoardApi::new();
        api.expect_list_users()
            .returning(|| Err(AppError::Forbidden("This action is unauthorized.".to_string())));

        let session = session_as(Some(user(2, "Plain"))).await;
        let (service, _) = build(api, session.clone());

        match service.list_users().await {
            Err(AppError::Forbidden(msg)) => assert_eq!(msg, ADMIN_REQUIRED_MESSAGE),
            other => panic!("unexpected: {:?}", other),
        }
        // 403 is not a session problem
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_unauthorized_listing_clears_session() {
        let mut api = MockJobBoardApi::new();
        api.expect_list_users()
            .returning(|| Err(AppError::Unauthorized));

        let session = session_as(Some(admin(1, "Root"))).await;
        let (service, _) = build(api, session.clone());

        assert!(service.list_users().await.unwrap_err().is_unauthorized());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_filter_users_by_name_or_id() {
        let users = vec![user(12, "Ada"), user(3, "Grace"), user(45, "adam")];

        let names: Vec<&str> = filter_users(&users, "AD").iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "adam"]);

        let ids: Vec<u64> = filter_users(&users, "4").iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![45]);

        assert_eq!(filter_users(&users, "").len(), 3);
    }

    #[tokio::test]
    async fn test_profile_defaults_to_current_user() {
        let mut api = MockJobBoardApi::new();
        api.expect_get_user()
            .withf(|id| *id == 5)
            .returning(|id| {
                let mut u = user(id, "Me");
                u.profile_photo = Some("profile_photos/me.jpg".to_string());
                Ok(u)
            });

        let (service, _) = build(api, session_as(Some(user(5, "Me"))).await);
        let profile = service.get_profile(None).await.unwrap();

        assert!(profile.can_edit);
        assert_eq!(
            profile.user.profile_photo.as_deref(),
            Some("http://localhost:8000/storage/profile_photos/me.jpg")
        );
    }

    #[tokio::test]
    async fn test_other_profile_editable_only_by_admin() {
        let mut api = MockJobBoardApi::new();
        api.expect_get_user().returning(|id| Ok(user(id, "Other")));
        let (service, _) = build(api, session_as(Some(user(5, "Me"))).await);
        assert!(!service.get_profile(Some(9)).await.unwrap().can_edit);

        let mut api = MockJobBoardApi::new();
        api.expect_get_user().returning(|id| Ok(user(id, "Other")));
        let (service, _) = build(api, session_as(Some(admin(1, "Root"))).await);
        assert!(service.get_profile(Some(9)).await.unwrap().can_edit);
    }

    #[tokio::test]
    async fn test_update_profile_refreshes_session_user() {
        let mut api = MockJobBoardApi::new();
        api.expect_update_user()
            .withf(|id, update| *id == 5 && update.profile_photo.is_some())
            .returning(|id, update| {
                let mut u = user(id, &update.name);
                u.profile_photo = Some("https://cdn.example.com/me.png".to_string());
                Ok(u)
            });

        let session = session_as(Some(user(5, "Me"))).await;
        let (service, bus) = build(api, session.clone());

        let updated = service
            .update_profile(ProfileUpdate {
                name: "New Me".to_string(),
                description: "Hello".to_string(),
                profile_photo: Some(Attachment::new("me.png", vec![0x89, 0x50])),
            })
            .await
            .unwrap();

        assert_eq!(updated.profile_photo.as_deref(), Some("https://cdn.example.com/me.png"));
        assert_eq!(session.current_user().unwrap().name, "New Me");
        assert_eq!(bus.emitted_count("ProfileUpdated"), 1);
    }

    #[tokio::test]
    async fn test_saved_jobs_come_from_user_detail() {
        let mut api = MockJobBoardApi::new();
        api.expect_get_user().returning(|id| {
            let mut u = user(id, "Me");
            u.saved_jobs = Some(vec![job(1, 7, "Rust Engineer")]);
            Ok(u)
        });

        let (service, _) = build(api, session_as(Some(user(5, "Me"))).await);
        let saved = service.saved_jobs().await.unwrap();
        assert_eq!(saved.len(), 1);

        let mut api = MockJobBoardApi::new();
        api.expect_get_user().returning(|id| Ok(user(id, "Me")));
        let (service, _) = build(api, session_as(Some(user(5, "Me"))).await);
        assert!(service.saved_jobs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_employer_request_default_confirmation() {
        let mut api = MockJobBoardApi::new();
        api.expect_request_employer_role()
            .withf(|message| message == "We hire Rust developers")
            .returning(|_| Ok(None));

        let (service, bus) = build(api, session_as(Some(user(5, "Me"))).await);
        let reply = service
            .request_employer_role("  We hire Rust developers ")
            .await
            .unwrap();

        assert_eq!(reply, EMPLOYER_REQUEST_SENT);
        assert_eq!(bus.emitted_count("EmployerRoleRequested"), 1);
    }

    #[tokio::test]
    async fn test_employer_request_needs_message() {
        let (service, _) = build(MockJobBoardApi::new(), session_as(Some(user(5, "Me"))).await);
        assert!(matches!(
            service.request_employer_role("   ").await,
            Err(AppError::Validation(_))
        ));
    }
}
