// ABOUTME: Domain service layer: record mutations that load, change and save user data
// ABOUTME: Services are free functions over a UserRepository so any store can back them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Each operation loads the affected record, applies one change and writes
//! the whole record back. Pure computations live in `lockin_intelligence`;
//! these functions only add persistence around them.

/// Daily logs, logged foods and custom foods
pub mod nutrition;

/// Saving and resetting the weekly plan
pub mod plans;

/// Profile save and load
pub mod profile;

/// Workout session lifecycle
pub mod sessions;
