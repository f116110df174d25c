// ABOUTME: User profile with anthropometrics, body measurements and daily goals
// ABOUTME: Nested records are backfilled with defaults when absent from stored JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::goals::{DEFAULT_CALORIE_TARGET, DEFAULT_STEP_TARGET};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Biological sex used by the energy estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    /// Female
    Female,
    /// Male
    Male,
}

/// Length unit for height and measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Centimetres
    #[default]
    Cm,
    /// Inches
    In,
}

/// Recent bodyweight direction reported during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightTrend {
    /// Losing weight
    Losing,
    /// Gaining weight
    Gaining,
    /// Stable weight
    Stable,
    /// Not sure
    Unsure,
}

/// Day-to-day activity outside training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Mostly sitting
    Sedentary,
    /// Some walking and standing
    Moderate,
    /// On the feet most of the day
    Active,
}

/// Weekly exercise sessions bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseFrequency {
    /// No sessions
    #[serde(rename = "0")]
    None,
    /// One to three sessions
    #[serde(rename = "1-3")]
    Light,
    /// Four to six sessions
    #[serde(rename = "4-6")]
    Regular,
    /// Seven or more sessions
    #[serde(rename = "7+")]
    Daily,
}

/// Self-reported training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// Never trained
    None,
    /// Beginner
    Beginner,
    /// Intermediate
    Intermediate,
    /// Advanced
    Advanced,
}

/// Body measurements, all in `UserProfile::measurement_unit`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Measurements {
    /// Chest circumference
    pub chest: f64,
    /// Waist circumference
    pub waist: f64,
    /// Hip circumference
    pub hips: f64,
    /// Left arm circumference
    pub left_arm: f64,
    /// Right arm circumference
    pub right_arm: f64,
    /// Left thigh circumference
    pub left_thigh: f64,
    /// Right thigh circumference
    pub right_thigh: f64,
}

/// Daily calorie and step targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserGoals {
    /// Calories to consume per day
    pub calorie_target: u32,
    /// Steps to walk per day
    pub step_target: u32,
}

impl Default for UserGoals {
    fn default() -> Self {
        Self {
            calorie_target: DEFAULT_CALORIE_TARGET,
            step_target: DEFAULT_STEP_TARGET,
        }
    }
}

/// The current user's profile.
///
/// Legacy profiles written before measurements or goals existed, or that store
/// them as `null`, deserialize with those records filled from their defaults, so
/// callers never observe a profile without them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age in whole years, recomputed from `dob` on save
    pub age: u32,
    /// Date of birth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    /// Biological sex
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    /// Height in `height_unit`
    pub height: f64,
    /// Height unit
    pub height_unit: LengthUnit,
    /// Bodyweight
    pub weight: f64,
    /// Recent weight trend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_trend: Option<WeightTrend>,
    /// Body fat bracket label (`13-17%`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<String>,
    /// Activity outside training
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Weekly exercise frequency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_frequency: Option<ExerciseFrequency>,
    /// Cardio experience
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardio_experience: Option<ExperienceLevel>,
    /// Lifting experience
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifting_experience: Option<ExperienceLevel>,
    /// Body measurements
    #[serde(deserialize_with = "null_as_default")]
    pub measurements: Measurements,
    /// Unit for `measurements`
    #[serde(deserialize_with = "null_as_default")]
    pub measurement_unit: LengthUnit,
    /// Last time the profile was saved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    /// Whether onboarding has been completed
    pub onboarding_completed: bool,
    /// Daily targets
    #[serde(deserialize_with = "null_as_default")]
    pub goals: UserGoals,
}
