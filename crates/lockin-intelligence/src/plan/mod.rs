// ABOUTME: Workout plan generation from static split tables plus the custom plan path
// ABOUTME: Re-exports the split registry, mini presets and plan editing helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Generator
//!
//! Two ways to build a weekly plan:
//!
//! - **Generated**: pick a training frequency and a [`SplitKind`];
//!   [`generate_plan`] lays a fixed day sequence over a fixed weekday pattern.
//! - **Custom**: [`CustomPlanBuilder`] starts with seven rest days which are
//!   filled one by one, optionally from a [`MiniPreset`].
//!
//! Either way the plan goes through [`finalize_plan`] before it is saved.

/// Static day-template tables
pub mod day_templates;

mod custom;
mod presets;
mod splits;

pub use custom::{finalize_plan, swap_exercise, CustomPlanBuilder, PlanError};
pub use presets::MiniPreset;
pub use splits::{generate_plan, list_available_splits, SplitKind, SplitSummary};
