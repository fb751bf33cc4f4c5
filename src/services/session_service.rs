// src/services/session_service.rs
//
// Session Store
//
// CRITICAL RULES:
// - SessionService is the ONLY writer of the token and identity
// - SessionHandle is the read side; the HTTP client holds one to attach
//   the bearer token to each request
// - logout() and initialize() never fail: problems are logged and the
//   session ends logged-out
// - A failed login/register leaves the current session untouched

use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::{
    validate_credentials, validate_registration, validate_session, Credentials, Registration,
    Session, User,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, SessionClearReason, SessionCleared, SessionEstablished, SessionOrigin};
use crate::integrations::{AuthResponse, CredentialProvider, JobBoardApi};
use crate::repositories::SessionRepository;

/// Shared read access to the current session.
#[derive(Clone, Default)]
pub struct SessionHandle {
    state: Arc<RwLock<Session>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Session {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .user
            .clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .loading
    }

    // Private: only SessionService (same module) mutates
    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl CredentialProvider for SessionHandle {
    fn bearer_token(&self) -> Option<String> {
        self.token()
    }
}

pub struct SessionService {
    handle: SessionHandle,
    repository: Arc<dyn SessionRepository>,
    api: Arc<dyn JobBoardApi>,
    event_bus: Arc<EventBus>,
}

impl SessionService {
    pub fn new(
        handle: SessionHandle,
        repository: Arc<dyn SessionRepository>,
        api: Arc<dyn JobBoardApi>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            handle,
            repository,
            api,
            event_bus,
        }
    }

    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    pub fn snapshot(&self) -> Session {
        self.handle.snapshot()
    }

    pub fn current_user(&self) -> Option<User> {
        self.handle.current_user()
    }

    pub fn token(&self) -> Option<String> {
        self.handle.token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.handle.is_authenticated()
    }

    /// The logged-in user, or `Unauthorized` for a guarded view.
    pub fn require_user(&self) -> AppResult<User> {
        self.handle.current_user().ok_or(AppError::Unauthorized)
    }

    // ========================================================================
    // LOGIN / REGISTER
    // ========================================================================

    pub async fn login(&self, credentials: Credentials) -> AppResult<User> {
        if let Err(e) = validate_credentials(&credentials) {
            return Err(self.fail(e.into(), "Login failed"));
        }

        match self.api.login(&credentials).await {
            Ok(auth) => self.establish(auth, SessionOrigin::Login),
            Err(e) => Err(self.fail(e, "Login failed")),
        }
    }

    pub async fn register(&self, registration: Registration) -> AppResult<User> {
        if let Err(e) = validate_registration(&registration) {
            return Err(self.fail(e.into(), "Registration failed"));
        }

        match self.api.register(&registration).await {
            Ok(auth) => self.establish(auth, SessionOrigin::Register),
            Err(e) => Err(self.fail(e, "Registration failed")),
        }
    }

    fn establish(&self, auth: AuthResponse, origin: SessionOrigin) -> AppResult<User> {
        let next = Session::established(auth.access_token, auth.user);
        validate_session(&next)?;

        let (token, user) = match (&next.token, &next.user) {
            (Some(token), Some(user)) => (token.clone(), user.clone()),
            _ => return Err(AppError::Other("Incomplete session".to_string())),
        };

        if let Err(e) = self.repository.save(&token, Some(&user)) {
            log::error!("Failed to persist session: {}", e);
        }

        self.handle.update(|session| *session = next);
        log::info!("Session established for user {} ({:?})", user.id, origin);
        self.event_bus.emit(SessionEstablished::new(user.id, origin));

        Ok(user)
    }

    /// Record the failure on the session and hand the error back.
    fn fail(&self, error: AppError, fallback: &str) -> AppError {
        let message = failure_message(&error, fallback);
        log::info!("Authentication failed: {}", message);
        self.handle.update(|session| session.record_failure(message));
        error
    }

    // ========================================================================
    // LOGOUT / INVALIDATION
    // ========================================================================

    pub fn logout(&self) {
        self.clear(SessionClearReason::Logout);
    }

    /// Called when a request carrying `rejected` was answered with 401.
    /// A session established since then holds another token and survives.
    pub fn handle_unauthorized(&self, rejected: Option<&str>) {
        let current = self
            .handle
            .update(|session| session.token.is_some() && session.token.as_deref() == rejected);
        if current {
            log::warn!("Token rejected by backend; clearing session");
            self.clear(SessionClearReason::Unauthorized);
        } else {
            log::debug!("Ignoring 401 for a token that is no longer current");
        }
    }

    /// Await a backend call, clearing the session if it is answered with
    /// 401 while the token it was sent with is still current.
    pub async fn intercept<T, F>(&self, call: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        let sent_with = self.handle.token();
        let result = call.await;
        if let Err(e) = &result {
            if e.is_unauthorized() {
                self.handle_unauthorized(sent_with.as_deref());
            }
        }
        result
    }

    fn clear(&self, reason: SessionClearReason) {
        let previous = self.handle.update(|session| {
            let previous = session.user.as_ref().map(|u| u.id);
            *session = Session::empty();
            previous
        });

        if let Err(e) = self.repository.clear() {
            log::error!("Failed to clear persisted session: {}", e);
        }

        self.event_bus.emit(SessionCleared::new(previous, reason));
    }

    // ========================================================================
    // STARTUP
    // ========================================================================

    /// Restore the persisted token and revalidate it once.
    pub async fn initialize(&self) {
        let persisted = match self.repository.load() {
            Ok(persisted) => persisted,
            Err(e) => {
                log::error!("Failed to read persisted session: {}", e);
                None
            }
        };

        let Some(persisted) = persisted else {
            self.handle.update(|session| *session = Session::empty());
            return;
        };

        let token = persisted.token;
        self.handle
            .update(|session| *session = Session::pending(token.clone()));

        match self.api.current_user().await {
            Ok(user) => {
                // A login during revalidation wins
                let current = self.handle.update(|session| {
                    if session.token.as_deref() == Some(token.as_str()) && session.loading {
                        *session = Session::established(token.clone(), user.clone());
                        true
                    } else {
                        false
                    }
                });
                if !current {
                    return;
                }

                if let Err(e) = self.repository.save(&token, Some(&user)) {
                    log::warn!("Failed to refresh persisted user: {}", e);
                }
                log::info!("Restored session for user {}", user.id);
                self.event_bus
                    .emit(SessionEstablished::new(user.id, SessionOrigin::Revalidation));
            }
            Err(e) => {
                log::info!("Persisted token rejected ({}); starting logged out", e);
                let stale = self
                    .handle
                    .update(|session| session.token.as_deref() == Some(token.as_str()));
                if stale {
                    self.clear(SessionClearReason::RevalidationFailed);
                }
            }
        }
    }

    /// Replace the identity after the user edited their own profile.
    pub fn refresh_current_user(&self, user: User) {
        let token = self.handle.update(|session| match &session.user {
            Some(current) if current.id == user.id => {
                session.user = Some(user.clone());
                session.token.clone()
            }
            _ => None,
        });

        if let Some(token) = token {
            if let Err(e) = self.repository.save(&token, Some(&user)) {
                log::warn!("Failed to persist updated user: {}", e);
            }
        }
    }
}

/// User-facing text for a failed login or registration
pub fn failure_message(error: &AppError, fallback: &str) -> String {
    match error {
        AppError::Api { message, .. } => message.clone(),
        AppError::Domain(e) => e.to_string(),
        AppError::Validation(_) => error
            .to_string()
            .trim_start_matches("Validation failed: ")
            .to_string(),
        AppError::Conflict(message) | AppError::Forbidden(message) => message.clone(),
        _ => format!("{}. Please try again.", fallback),
    }
}
