// src/services/application_service_tests.rs
//
// Applications and interview scheduling.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::domain::{
        ApplicationUpload, Attachment, AttachmentKind, DownloadedFile, Interview, InterviewRequest,
    };
    use crate::error::AppError;
    use crate::events::EventBus;
    use crate::integrations::jobboard::MockJobBoardApi;
    use crate::services::application_service::ApplicationService;
    use crate::services::interview_service::InterviewService;
    use crate::services::test_support::*;
    use crate::services::SessionService;

    fn applications(
        api: MockJobBoardApi,
        session: Arc<SessionService>,
    ) -> (ApplicationService, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        (ApplicationService::new(Arc::new(api), session, bus.clone()), bus)
    }

    fn interviews(api: MockJobBoardApi, session: Arc<SessionService>) -> InterviewService {
        InterviewService::new(Arc::new(api), session, Arc::new(EventBus::new()))
    }

    fn resume() -> ApplicationUpload {
        ApplicationUpload {
            resume: Some(Attachment::new("cv.pdf", b"%PDF".to_vec())),
            cover_letter: None,
        }
    }

    // ========================================================================
    // APPLY
    // ========================================================================

    #[tokio::test]
    async fn test_apply_requires_resume() {
        let (service, _) = applications(
            MockJobBoardApi::new(),
            session_as(Some(user(2, "Applicant"))).await,
        );

        let err = service
            .apply(1, ApplicationUpload::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(_)));
    }

    #[tokio::test]
    async fn test_apply_submits_and_emits() {
        let mut api = MockJobBoardApi::new();
        api.expect_apply_to_job()
            .withf(|id, upload| *id == 9 && upload.resume.is_some())
            .times(1)
            .returning(|_, _| Ok(()));

        let (service, bus) = applications(api, session_as(Some(user(2, "Applicant"))).await);
        service.apply(9, resume()).await.unwrap();

        assert_eq!(bus.emitted_count("ApplicationSubmitted"), 1);
    }

    #[tokio::test]
    async fn test_duplicate_application_is_conflict() {
        let mut api = MockJobBoardApi::new();
        api.expect_apply_to_job()
            .returning(|_, _| Err(AppError::Conflict("Conflict".to_string())));

        let (service, bus) = applications(api, session_as(Some(user(2, "Applicant"))).await);
        let err = service.apply(9, resume()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(bus.emitted_count("ApplicationSubmitted"), 0);
    }

    // ========================================================================
    // REVIEW
    // ========================================================================

    #[tokio::test]
    async fn test_received_requires_employer() {
        let (service, _) = applications(
            MockJobBoardApi::new(),
            session_as(Some(user(2, "Applicant"))).await,
        );
        assert!(matches!(
            service.received_applications().await,
            Err(AppError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn test_application_visible_to_applicant_and_job_owner() {
        let mut api = MockJobBoardApi::new();
        api.expect_get_application()
            .returning(|id| Ok(application(id, 2, Some(job(5, 7, "Rust Engineer")))));
        let (service, _) = applications(api, session_as(Some(user(2, "Applicant"))).await);
        assert!(service.get_application(1).await.is_ok());

        let mut api = MockJobBoardApi::new();
        api.expect_get_application()
            .returning(|id| Ok(application(id, 2, Some(job(5, 7, "Rust Engineer")))));
        let (service, _) = applications(api, session_as(Some(employer(7, "Owner"))).await);
        assert!(service.get_application(1).await.is_ok());

        let mut api = MockJobBoardApi::new();
        api.expect_get_application()
            .returning(|id| Ok(application(id, 2, Some(job(5, 7, "Rust Engineer")))));
        let (service, _) = applications(api, session_as(Some(user(3, "Stranger"))).await);
        match service.get_application(1).await {
            Err(AppError::Forbidden(msg)) => {
                assert_eq!(msg, "You do not have permission to view this application.")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_download_passes_file_through() {
        let mut api = MockJobBoardApi::new();
        api.expect_download_attachment()
            .withf(|id, kind| *id == 4 && *kind == AttachmentKind::CoverLetter)
            .returning(|id, kind| {
                Ok(DownloadedFile {
                    file_name: DownloadedFile::fallback_name(kind, id),
                    content_type: None,
                    bytes: vec![1, 2, 3],
                })
            });

        let (service, _) = applications(api, session_as(Some(employer(7, "Owner"))).await);
        let file = service
            .download_attachment(4, AttachmentKind::CoverLetter)
            .await
            .unwrap();

        assert_eq!(file.file_name, "cover-letter_application_4.file");
        assert_eq!(file.bytes, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_delete_emits() {
        let mut api = MockJobBoardApi::new();
        api.expect_delete_application()
            .times(1)
            .returning(|_| Ok(()));

        let (service, bus) = applications(api, session_as(Some(user(2, "Applicant"))).await);
        service.delete_application(4).await.unwrap();
        assert_eq!(bus.emitted_count("ApplicationDeleted"), 1);
    }

    // ========================================================================
    // INTERVIEWS
    // ========================================================================

    #[tokio::test]
    async fn test_scheduling_limited_to_job_owner() {
        let mut api = MockJobBoardApi::new();
        api.expect_get_application()
            .returning(|id| Ok(application(id, 2, Some(job(5, 7, "Rust Engineer")))));

        let service = interviews(api, session_as(Some(employer(8, "Someone Else"))).await);
        match service.load_for_scheduling(1).await {
            Err(AppError::Forbidden(msg)) => assert_eq!(
                msg,
                "You do not have permission to schedule an interview for this application."
            ),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_schedule_validates_request() {
        let service = interviews(
            MockJobBoardApi::new(),
            session_as(Some(employer(7, "Owner"))).await,
        );

        let err = service
            .schedule(
                1,
                InterviewRequest {
                    title: "Tech screen".to_string(),
                    scheduled_at: "".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Domain error: Invariant violation: Please provide both a title and a date/time."
        );
    }

    #[tokio::test]
    async fn test_schedule_sends_request() {
        let mut api = MockJobBoardApi::new();
        api.expect_schedule_interview()
            .withf(|id, req| *id == 1 && req.scheduled_at == "2026-03-01T10:30")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = interviews(api, session_as(Some(employer(7, "Owner"))).await);
        service
            .schedule(
                1,
                InterviewRequest {
                    title: "Tech screen".to_string(),
                    scheduled_at: "2026-03-01T10:30".to_string(),
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_calendar_skips_unparseable_entries() {
        let mut api = MockJobBoardApi::new();
        api.expect_scheduled_interviews().returning(|| {
            let mut app = application(1, 2, Some(job(5, 7, "Rust Engineer")));
            app.user = Some(user(2, "Applicant"));
            Ok(vec![
                Interview {
                    id: 1,
                    job_application_id: 1,
                    title: "Screen".to_string(),
                    scheduled_at: "2026-03-01 10:30:00".to_string(),
                    job_application: Some(app),
                },
                Interview {
                    id: 2,
                    job_application_id: 1,
                    title: "Broken".to_string(),
                    scheduled_at: "next tuesday".to_string(),
                    job_application: None,
                },
            ])
        });

        let service = interviews(api, session_as(Some(employer(7, "Owner"))).await);
        let events = service.calendar().await.unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Screen - Applicant for Rust Engineer");
        assert_eq!(events[0].start, events[0].end);
    }
}
