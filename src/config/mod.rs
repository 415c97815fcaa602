//! Configuration management for the shelved application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `SHELVED_API_URL`: Chat completions API base URL (defaults to Groq)
//! - `GROQ_API_KEY`: API key for model calls; may be absent, in which case
//!   every remote call fails and the interview runs on local fallbacks
//! - `SHELVED_MODEL`: Chat model identifier
//! - `SHELVED_SHELF`: Path to the shelf file (defaults to
//!   ~/Documents/bookshelf.md)
//! - `HOME`: Used for expanding the default shelf path

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_CHAT_MODEL, DEFAULT_SHELF_SUBPATH, ENV_VAR_API_KEY, ENV_VAR_API_URL,
    ENV_VAR_HOME, ENV_VAR_MODEL, ENV_VAR_SHELF,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the shelved application.
pub struct Config {
    /// Base URL of the chat completions API.
    pub api_url: String,
    /// Bearer token for the API. Empty when no key is configured; the
    /// interview still works, on fallback questions only.
    pub api_key: String,
    /// Chat model identifier used for interview and synthesis calls.
    pub model: String,
    /// Path of the markdown shelf file finished books are appended to.
    pub shelf_path: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("shelf_path", &self.shelf_path)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible
    /// defaults.
    ///
    /// The shelf path is expanded with `shellexpand`, so `~` and embedded
    /// environment variables work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the shelf path fails to expand or
    /// expands to an empty path.
    pub fn load() -> AppResult<Self> {
        let api_url = env::var(ENV_VAR_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_key = env::var(ENV_VAR_API_KEY).unwrap_or_default();
        let model = env::var(ENV_VAR_MODEL).unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());

        let shelf_str = env::var(ENV_VAR_SHELF).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_SHELF_SUBPATH)
        });
        let expanded = shellexpand::full(&shelf_str)
            .map_err(|e| AppError::Config(format!("Failed to expand shelf path: {}", e)))?;
        let shelf_path = PathBuf::from(expanded.into_owned());

        if shelf_path.as_os_str().is_empty() {
            return Err(AppError::Config("Shelf path is empty".to_string()));
        }

        Ok(Config {
            api_url,
            api_key,
            model,
            shelf_path,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// An empty API key is allowed; the interview degrades to its local
    /// fallbacks instead of failing.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the API URL, model, or shelf path is
    /// empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.api_url.trim().is_empty() {
            return Err(AppError::Config("API URL is empty".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::Config("Model identifier is empty".to_string()));
        }
        if self.shelf_path.as_os_str().is_empty() {
            return Err(AppError::Config("Shelf path is empty".to_string()));
        }
        Ok(())
    }

    /// Whether an API key is configured at all.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
