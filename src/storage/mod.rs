// ABOUTME: Key-value record storage with pluggable in-memory and SQLite backends
// ABOUTME: Every record is one JSON blob replaced atomically under a per-user key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Record Storage
//!
//! The tracker persists whole records (all sessions, all daily logs, the
//! profile) as JSON strings under per-user keys. A write replaces the full
//! blob and is visible to the next read. [`Storage`] picks a backend from a
//! [`StorageUrl`](crate::config::StorageUrl) and broadcasts a
//! [`StorageChange`] after each write so other observers can reload; there is
//! no merging, the last write wins.

/// Backend selection and change notifications
pub mod factory;
/// Process-local map backend
pub mod memory;
/// Per-user typed access to records
pub mod repository;
/// `SQLite` backend
pub mod sqlite;

use async_trait::async_trait;
use lockin_core::constants::storage_keys;
use lockin_core::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use factory::Storage;
pub use memory::InMemoryStore;
pub use repository::UserRepository;
pub use sqlite::SqliteStore;

/// Raw key-value persistence
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Stored value for `key`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value for `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn set(&self, key: &str, value: String) -> AppResult<()>;

    /// Delete `key`; returns whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn remove(&self, key: &str) -> AppResult<bool>;
}

/// Kind of record kept per user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Workout sessions
    Sessions,
    /// Saved plan templates
    Templates,
    /// User profile
    Profile,
    /// Daily nutrition and step logs
    DailyLogs,
    /// User-created foods
    CustomFoods,
    /// Preferred weight unit
    Unit,
}

impl RecordKind {
    /// Every record kind
    pub const ALL: [Self; 6] = [
        Self::Sessions,
        Self::Templates,
        Self::Profile,
        Self::DailyLogs,
        Self::CustomFoods,
        Self::Unit,
    ];

    /// Key suffix
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sessions => storage_keys::SESSIONS,
            Self::Templates => storage_keys::TEMPLATES,
            Self::Profile => storage_keys::PROFILE,
            Self::DailyLogs => storage_keys::DAILY_LOGS,
            Self::CustomFoods => storage_keys::CUSTOM_FOODS,
            Self::Unit => storage_keys::UNIT,
        }
    }

    /// Storage key of this record for `user` (`<user>_lockin_<kind>`)
    #[must_use]
    pub fn key_for(&self, user: &str) -> String {
        format!("{user}_{}_{}", storage_keys::KEY_PREFIX, self.as_str())
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Value written
    Set,
    /// Key deleted
    Removed,
}

/// Notification published after a successful write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageChange {
    /// Key that changed
    pub key: String,
    /// Kind of change
    pub kind: ChangeKind,
}
