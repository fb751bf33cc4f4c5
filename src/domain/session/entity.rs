use serde::Serialize;

use crate::domain::user::User;

/// Client-side record of who is logged in.
///
/// `user` is only ever set together with a token that the backend has
/// accepted, either by issuing it (login/register) or by answering the
/// current-user route with it (revalidation).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Session {
    pub user: Option<User>,

    #[serde(skip_serializing)]
    pub token: Option<String>,

    /// True while a persisted token is being revalidated
    pub loading: bool,

    pub last_error: Option<String>,
}

impl Session {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Token restored from storage, not yet confirmed by the backend
    pub fn pending(token: String) -> Self {
        Self {
            user: None,
            token: Some(token),
            loading: true,
            last_error: None,
        }
    }

    pub fn established(token: String, user: User) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            loading: false,
            last_error: None,
        }
    }

    /// Record a failed attempt without touching the current identity
    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.last_error = Some(message.into());
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}
