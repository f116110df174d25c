// ABOUTME: Storage location configuration for the per-user record store
// ABOUTME: Parses SQLite file paths, in-memory SQLite and the plain in-memory map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use lockin_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

/// Directory under the platform data dir holding the default database
const DATA_DIR_NAME: &str = "lockin";

/// Default database file name
const DATABASE_FILE_NAME: &str = "lockin.db";

/// Type-safe storage location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageUrl {
    /// `SQLite` database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    SQLiteMemory,
    /// Process-local map, nothing written to disk
    Memory,
}

impl StorageUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or names an unsupported scheme
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::config("STORAGE_URL must not be empty"));
        }
        if s.eq_ignore_ascii_case("memory") {
            return Ok(Self::Memory);
        }
        if let Some(path_str) = s.strip_prefix("sqlite:") {
            let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
            return if path_str == ":memory:" {
                Ok(Self::SQLiteMemory)
            } else if path_str.is_empty() {
                Err(AppError::config("sqlite: URL is missing a file path"))
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str),
                })
            };
        }
        if s.contains("://") {
            return Err(AppError::config(format!("Unsupported storage URL: {s}")));
        }
        // Fallback: treat as SQLite file path
        Ok(Self::SQLite {
            path: PathBuf::from(s),
        })
    }

    /// Convert to a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::SQLiteMemory => "sqlite::memory:".into(),
            Self::Memory => "memory".into(),
        }
    }

    /// Whether records vanish when the process exits
    #[must_use]
    pub const fn is_ephemeral(&self) -> bool {
        matches!(self, Self::SQLiteMemory | Self::Memory)
    }

    /// Check if this is a `SQLite` database
    #[must_use]
    pub const fn is_sqlite(&self) -> bool {
        matches!(self, Self::SQLite { .. } | Self::SQLiteMemory)
    }
}

impl Default for StorageUrl {
    fn default() -> Self {
        let path = dirs::data_dir().map_or_else(
            || PathBuf::from(".").join(DATABASE_FILE_NAME),
            |dir| dir.join(DATA_DIR_NAME).join(DATABASE_FILE_NAME),
        );
        Self::SQLite { path }
    }
}

impl Display for StorageUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}
