// ABOUTME: Environment configuration for the tracker binary and library callers
// ABOUTME: Reads storage location, active user, environment and log level from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use super::storage::StorageUrl;
use super::types::{Environment, LogLevel};
use lockin_core::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

/// User records are stored under when none is configured
pub const DEFAULT_USER: &str = "local";

/// Environment variable names
pub mod env_keys {
    /// Storage location
    pub const STORAGE_URL: &str = "STORAGE_URL";
    /// Active user name
    pub const USER: &str = "LOCKIN_USER";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where records are stored
    pub storage: StorageUrl,
    /// User whose records are read and written
    pub user: String,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageUrl::default(),
            user: DEFAULT_USER.to_owned(),
            environment: Environment::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `STORAGE_URL` is set but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        let storage = match env::var(env_keys::STORAGE_URL) {
            Ok(url) => StorageUrl::parse_url(&url)?,
            Err(_) => StorageUrl::default(),
        };
        let user = env::var(env_keys::USER)
            .ok()
            .map(|user| user.trim().to_owned())
            .filter(|user| !user.is_empty())
            .unwrap_or_else(|| DEFAULT_USER.to_owned());

        let config = Self {
            storage,
            user,
            environment: Environment::from_str_or_default(&env_var_or(
                env_keys::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(env_keys::LOG_LEVEL, "info")),
        };
        info!(
            storage = %config.storage,
            user = %config.user,
            environment = %config.environment,
            "Configuration loaded from environment"
        );
        Ok(config)
    }

    /// Human-readable summary for `--verbose` output
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "LockIn Configuration:\n\
             - Storage: {}\n\
             - User: {}\n\
             - Environment: {}\n\
             - Log Level: {}",
            self.storage, self.user, self.environment, self.log_level
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
