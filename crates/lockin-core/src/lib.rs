// ABOUTME: Core types and constants for the LockIn workout and nutrition tracker
// ABOUTME: Foundation crate with error handling, data models, catalogs and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LockIn Core
//!
//! Foundation crate providing shared types for the LockIn tracker. Everything
//! here is plain data: the persisted record shapes, the static exercise and
//! food catalogs, and the unified error type.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Default goals, plan titles and storage key names
//! - **models**: Workouts, sessions, nutrition logs and the user profile
//! - **catalog**: Built-in exercise and food catalogs

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (templates, sessions, daily logs, profile)
pub mod models;

/// Static exercise and food catalogs
pub mod catalog;
