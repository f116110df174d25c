// ABOUTME: Core data models for the LockIn tracker
// ABOUTME: Re-exports workout, session, nutrition and profile types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Record shapes persisted per user. Every model serializes in `camelCase`
//! so stored JSON keeps the field names the tracker has always written.
//!
//! ## Core Models
//!
//! - `WorkoutTemplate`: one weekday of a training plan
//! - `Session`: one performed workout with its sets
//! - `DailyLog`: meals, steps and water for one calendar date
//! - `FoodItem`: catalog or custom food with per-serving macros
//! - `UserProfile`: anthropometrics, measurements and daily goals

mod exercise;
mod nutrition;
mod profile;
mod workout;

pub use exercise::Exercise;

pub use workout::{
    DayOfWeek, Session, SessionExercise, SessionStatus, SetEntry, SetUpdate, TemplateExercise,
    WeightUnit, WorkoutTemplate,
};

pub use nutrition::{DailyLog, FoodItem, LoggedFood, MacroTotals, Meal, MealName};

pub use profile::{
    ActivityLevel, ExerciseFrequency, ExperienceLevel, LengthUnit, Measurements, Sex,
    UserGoals, UserProfile, WeightTrend,
};
