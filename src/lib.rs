// ABOUTME: Main library entry point for the LockIn workout and nutrition tracker
// ABOUTME: Wires configuration, logging, storage, domain services and export together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LockIn
//!
//! Personal workout planning, session logging and nutrition tracking for a
//! single local user.
//!
//! ## Architecture
//!
//! - **`lockin_core`**: data model, catalogs, constants and the unified error type
//! - **`lockin_intelligence`**: pure plan generation and activity aggregation
//! - **Storage**: async key/value record stores (in-memory or `SQLite`) behind a
//!   typed per-user repository
//! - **Services**: record mutations (sessions, daily logs, plans, profile)
//! - **Export**: CSV workout history
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use lockin::config::AppConfig;
//! use lockin::storage::{Storage, UserRepository};
//! use lockin::intelligence::plan::generate_plan;
//! use lockin::services::plans::save_plan;
//! use lockin_core::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let repo = UserRepository::new(Storage::new(&config.storage).await?);
//!
//!     if let Some(plan) = generate_plan(3, "Push/Pull/Legs") {
//!         save_plan(&repo, &config.user, plan).await?;
//!     }
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// CSV export of completed workouts
pub mod export;

/// Tracing subscriber setup
pub mod logging;

/// Domain services over the user repository
pub mod services;

/// Record stores and the typed user repository
pub mod storage;

pub use lockin_core as core;
pub use lockin_intelligence as intelligence;
