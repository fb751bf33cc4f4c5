// src/config.rs
//
// Client configuration
//
// Resolution order:
// 1. Built-in defaults
// 2. {CONFIG_DIR}/jobboard/config.json (if present)
// 3. JOBBOARD_* environment variables

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend origin; API routes live under `{api_base_url}/api`.
    pub api_base_url: String,

    /// Origin for uploaded files (logos, profile photos).
    pub storage_base_url: String,

    pub request_timeout_secs: u64,

    pub chat_poll_interval_ms: u64,

    /// Session database location. `None` means the platform data dir.
    pub database_path: Option<PathBuf>,

    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            storage_base_url: format!("{}/storage", DEFAULT_API_BASE_URL),
            request_timeout_secs: 30,
            chat_poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            database_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default file location and environment.
    pub fn load() -> AppResult<Self> {
        let mut config = match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply `JOBBOARD_*` overrides. The lookup is injected so tests do not
    /// touch the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("JOBBOARD_API_URL") {
            self.api_base_url = url;
        }
        if let Some(url) = lookup("JOBBOARD_STORAGE_URL") {
            self.storage_base_url = url;
        }
        if let Some(ms) = lookup("JOBBOARD_POLL_INTERVAL_MS") {
            self.chat_poll_interval_ms = ms.parse().map_err(|_| {
                AppError::Config(format!("JOBBOARD_POLL_INTERVAL_MS is not a number: {}", ms))
            })?;
        }
        if let Some(path) = lookup("JOBBOARD_DB_PATH") {
            self.database_path = Some(PathBuf::from(path));
        }
        if let Some(level) = lookup("JOBBOARD_LOG") {
            self.log_level = level;
        }
        self.validate()
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "api_base_url must be an http(s) URL, got {}",
                self.api_base_url
            )));
        }
        if self.chat_poll_interval_ms == 0 {
            return Err(AppError::Config("chat_poll_interval_ms must be positive".to_string()));
        }
        Ok(())
    }

    pub fn api_root(&self) -> String {
        format!("{}/api", self.api_base_url.trim_end_matches('/'))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn chat_poll_interval(&self) -> Duration {
        Duration::from_millis(self.chat_poll_interval_ms)
    }

    /// Turn a storage-relative path (as returned for logos and photos) into
    /// an absolute URL. Absolute URLs pass through untouched.
    pub fn storage_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.storage_base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jobboard").join("config.json"))
}
