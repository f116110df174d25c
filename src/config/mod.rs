// ABOUTME: Configuration management for storage location, active user and logging
// ABOUTME: Everything is read from environment variables, with CLI flags layered on top
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-driven application configuration
pub mod environment;
/// Storage location parsing
pub mod storage;
/// Shared enums (log level, environment)
pub mod types;

pub use environment::{AppConfig, DEFAULT_USER};
pub use storage::StorageUrl;
pub use types::{Environment, LogLevel};
