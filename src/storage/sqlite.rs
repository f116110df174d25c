// ABOUTME: SQLite record store using a single key-value table
// ABOUTME: Writes are single upserts so each record is replaced atomically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RecordStore;
use crate::config::StorageUrl;
use async_trait::async_trait;
use chrono::Utc;
use lockin_core::errors::{AppError, AppResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use std::path::Path;
use tracing::{debug, info};

/// Connections kept for a file database
const FILE_POOL_SIZE: u32 = 4;

/// `SQLite`-backed record store
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `url` and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is not a `SQLite` location, the parent
    /// directory cannot be created, or the connection or migration fails
    pub async fn connect(url: &StorageUrl) -> AppResult<Self> {
        let pool = match url {
            StorageUrl::SQLite { path } => {
                ensure_parent_dir(path).await?;
                // mode=rwc creates the file when it does not exist
                SqlitePoolOptions::new()
                    .max_connections(FILE_POOL_SIZE)
                    .connect(&format!("{}?mode=rwc", url.to_connection_string()))
                    .await?
            }
            // Every connection to :memory: is a separate database, so keep exactly one alive
            StorageUrl::SQLiteMemory => {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect(&url.to_connection_string())
                    .await?
            }
            StorageUrl::Memory => {
                return Err(AppError::config(
                    "The memory storage URL does not use SQLite",
                ))
            }
        };

        let store = Self { pool };
        store.migrate().await?;
        info!(storage = %url, "SQLite record store ready");
        Ok(store)
    }

    /// Create the records table if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS records (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

async fn ensure_parent_dir(path: &Path) -> AppResult<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    tokio::fs::create_dir_all(parent).await.map_err(|e| {
        AppError::storage(format!(
            "Cannot create storage directory {}: {e}",
            parent.display()
        ))
        .with_source(e)
    })
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let row = sqlx::query("SELECT value FROM records WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|row| row.try_get::<String, _>("value")).transpose()?)
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO records (key, value, updated_at) VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;
        debug!(key, "Record written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM records WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
