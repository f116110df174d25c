// ABOUTME: Application constants grouped by domain
// ABOUTME: Goal defaults, plan titles, session defaults and storage key names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Default daily targets used when a profile carries no goals
pub mod goals {
    /// Default daily calorie target (kcal)
    pub const DEFAULT_CALORIE_TARGET: u32 = 2000;
    /// Default daily step target
    pub const DEFAULT_STEP_TARGET: u32 = 10_000;
    /// TDEE returned when the profile lacks the inputs to compute one
    pub const DEFAULT_TDEE: u32 = 2200;
    /// Number of days in the rolling goal series
    pub const GOAL_SERIES_DAYS: usize = 7;
}

/// Workout plan constants
pub mod plans {
    /// Title marking a day without training
    pub const REST_DAY_TITLE: &str = "Rest Day";
    /// Title used in exports when a session's template no longer exists
    pub const CUSTOM_WORKOUT_TITLE: &str = "Custom Workout";
    /// Default sets for an exercise added by hand
    pub const DEFAULT_SETS: u32 = 3;
    /// Default rep range for an exercise added by hand
    pub const DEFAULT_REPS: &str = "8-12";
}

/// Session snapshot fallbacks
pub mod sessions {
    /// Name used when an exercise id is missing from the catalog
    pub const UNKNOWN_EXERCISE_NAME: &str = "Unknown Exercise";
    /// Muscle group used when an exercise id is missing from the catalog
    pub const UNKNOWN_MUSCLE_GROUP: &str = "Unknown";
    /// Sets created for an exercise added mid-session
    pub const ADDED_EXERCISE_SETS: u32 = 3;
}

/// Storage key names (namespaced per user at runtime)
pub mod storage_keys {
    /// Key prefix shared by every record kind
    pub const KEY_PREFIX: &str = "lockin";
    /// Workout sessions
    pub const SESSIONS: &str = "sessions";
    /// Saved workout plan templates
    pub const TEMPLATES: &str = "templates";
    /// User profile
    pub const PROFILE: &str = "profile";
    /// Daily nutrition and step logs
    pub const DAILY_LOGS: &str = "daily_logs";
    /// User-created foods
    pub const CUSTOM_FOODS: &str = "custom_foods";
    /// Preferred weight unit
    pub const UNIT: &str = "unit";
}

/// Energy expenditure estimation
pub mod energy {
    /// Mifflin-St Jeor weight coefficient
    pub const BMR_WEIGHT_FACTOR: f64 = 10.0;
    /// Mifflin-St Jeor height coefficient
    pub const BMR_HEIGHT_FACTOR: f64 = 6.25;
    /// Mifflin-St Jeor age coefficient
    pub const BMR_AGE_FACTOR: f64 = 5.0;
    /// Sex offset for males
    pub const BMR_MALE_OFFSET: f64 = 5.0;
    /// Sex offset for females
    pub const BMR_FEMALE_OFFSET: f64 = -161.0;
    /// Multiplier for a sedentary lifestyle
    pub const SEDENTARY_MULTIPLIER: f64 = 1.3;
    /// Multiplier for a moderately active lifestyle
    pub const MODERATE_MULTIPLIER: f64 = 1.55;
    /// Multiplier for an active lifestyle
    pub const ACTIVE_MULTIPLIER: f64 = 1.725;
    /// TDEE is rounded to a multiple of this
    pub const TDEE_ROUNDING: f64 = 10.0;
}
