// src/repositories/session_repository.rs
//
// Durable storage for the bearer token and the serialized identity.

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::User;
use crate::error::{AppError, AppResult};

/// What survives a restart
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedSession {
    pub token: String,
    pub user: Option<User>,
    pub updated_at: DateTime<Utc>,
}

pub trait SessionRepository: Send + Sync {
    fn load(&self) -> AppResult<Option<PersistedSession>>;
    fn save(&self, token: &str, user: Option<&User>) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

pub struct SqliteSessionRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSessionRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl SessionRepository for SqliteSessionRepository {
    fn load(&self) -> AppResult<Option<PersistedSession>> {
        let conn = self.pool.get()?;

        let row: Option<(String, Option<String>, String)> = conn
            .query_row(
                "SELECT token, user_json, updated_at FROM session WHERE id = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        let Some((token, user_json, updated_at)) = row else {
            return Ok(None);
        };

        // A damaged identity blob is not fatal: the token is revalidated anyway
        let user = match user_json.as_deref().map(serde_json::from_str::<User>) {
            Some(Ok(user)) => Some(user),
            Some(Err(e)) => {
                log::warn!("Discarding unreadable persisted user: {}", e);
                None
            }
            None => None,
        };

        let updated_at = DateTime::parse_from_rfc3339(&updated_at)?.with_timezone(&Utc);

        Ok(Some(PersistedSession {
            token,
            user,
            updated_at,
        }))
    }

    fn save(&self, token: &str, user: Option<&User>) -> AppResult<()> {
        if token.trim().is_empty() {
            return Err(AppError::Other("Refusing to persist an empty token".to_string()));
        }

        let conn = self.pool.get()?;
        let user_json = user.map(serde_json::to_string).transpose()?;

        conn.execute(
            "INSERT OR REPLACE INTO session (id, token, user_json, updated_at)
             VALUES (1, ?1, ?2, ?3)",
            params![token, user_json, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM session", [])?;
        Ok(())
    }
}
