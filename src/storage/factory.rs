// ABOUTME: Storage factory selecting the record backend from the configured URL
// ABOUTME: Wraps the backend and broadcasts a change notification after every write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::memory::InMemoryStore;
use super::sqlite::SqliteStore;
use super::{ChangeKind, RecordStore, StorageChange};
use crate::config::StorageUrl;
use async_trait::async_trait;
use lockin_core::errors::AppResult;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Change notifications buffered per subscriber before the oldest are dropped
const CHANGE_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
enum Backend {
    Memory(InMemoryStore),
    Sqlite(SqliteStore),
}

/// Record store selected at runtime, with change notifications
#[derive(Debug, Clone)]
pub struct Storage {
    backend: Backend,
    changes: broadcast::Sender<StorageChange>,
}

impl Storage {
    /// Open the backend named by `url`
    ///
    /// # Errors
    ///
    /// Returns an error if the `SQLite` database cannot be opened
    pub async fn new(url: &StorageUrl) -> AppResult<Self> {
        let backend = match url {
            StorageUrl::Memory => Backend::Memory(InMemoryStore::new()),
            StorageUrl::SQLite { .. } | StorageUrl::SQLiteMemory => {
                Backend::Sqlite(SqliteStore::connect(url).await?)
            }
        };
        let storage = Self::with_backend(backend);
        info!(backend = storage.backend_info(), "Storage initialized");
        Ok(storage)
    }

    /// Process-local storage
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_backend(Backend::Memory(InMemoryStore::new()))
    }

    fn with_backend(backend: Backend) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self { backend, changes }
    }

    /// Get a descriptive string for the current backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self.backend {
            Backend::Memory(_) => "In-memory map",
            Backend::Sqlite(_) => "SQLite",
        }
    }

    /// Receive a [`StorageChange`] for every later write through this storage or its clones
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StorageChange> {
        self.changes.subscribe()
    }

    fn publish(&self, key: &str, kind: ChangeKind) {
        // No subscribers is the common case
        if self
            .changes
            .send(StorageChange {
                key: key.to_owned(),
                kind,
            })
            .is_err()
        {
            debug!(key, "No storage change subscribers");
        }
    }

    fn store(&self) -> &dyn RecordStore {
        match &self.backend {
            Backend::Memory(store) => store,
            Backend::Sqlite(store) => store,
        }
    }
}

#[async_trait]
impl RecordStore for Storage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.store().get(key).await
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        self.store().set(key, value).await?;
        self.publish(key, ChangeKind::Set);
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<bool> {
        let existed = self.store().remove(key).await?;
        if existed {
            self.publish(key, ChangeKind::Removed);
        }
        Ok(existed)
    }
}
