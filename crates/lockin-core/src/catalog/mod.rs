// ABOUTME: Static catalogs loaded at startup and never mutated
// ABOUTME: Exercise catalog grouped by muscle group and the built-in food list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Exercise catalog grouped by muscle group
pub mod exercises;

/// Built-in foods and the combined food database
pub mod foods;

pub use exercises::{find_exercise, search_exercises, CatalogEntry, ExerciseGroup, EXERCISE_GROUPS};
pub use foods::{builtin_foods, FoodDatabase};
