// ABOUTME: Single-day exercise presets offered while editing a custom plan day
// ABOUTME: Push, Pull, Legs, Upper, Lower and Full Body lists with set and rep targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::day_templates::{
    to_template_exercises, PlannedExercise, FULL_BODY_A_EXERCISES, LEGS_HAMSTRING_EXERCISES,
    LEGS_QUAD_EXERCISES, PULL_EXERCISES, PUSH_EXERCISES,
};
use lockin_core::models::TemplateExercise;
use serde::{Deserialize, Serialize};
use std::fmt;

const UPPER_BODY_EXERCISES: &[PlannedExercise] = &[
    PlannedExercise { id: "back_54", sets: 3, reps: "5-10" },
    PlannedExercise { id: "chest_22", sets: 3, reps: "8-10" },
    PlannedExercise { id: "back_69", sets: 3, reps: "10-15" },
    PlannedExercise { id: "shoulder_34", sets: 3, reps: "10-12" },
    PlannedExercise { id: "chest_32", sets: 2, reps: "12-20" },
];

/// Preset exercise list loadable into one custom day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MiniPreset {
    /// Chest, shoulders and triceps
    Push,
    /// Back and biceps
    Pull,
    /// Quad-focused legs
    Legs,
    /// Upper body
    Upper,
    /// Hamstring-focused lower body
    Lower,
    /// Whole body
    FullBody,
}

impl MiniPreset {
    /// Presets in the order they are offered
    pub const ALL: [Self; 6] = [
        Self::Push,
        Self::Pull,
        Self::Legs,
        Self::Upper,
        Self::Lower,
        Self::FullBody,
    ];

    /// Preset name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Push => "Push",
            Self::Pull => "Pull",
            Self::Legs => "Legs",
            Self::Upper => "Upper",
            Self::Lower => "Lower",
            Self::FullBody => "Full Body",
        }
    }

    /// Title given to a day that has none when this preset is applied
    #[must_use]
    pub fn day_title(&self) -> String {
        format!("{} Day", self.name())
    }

    /// Parse a preset name, ignoring case
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(wanted))
    }

    /// The preset's exercises
    #[must_use]
    pub fn exercises(&self) -> Vec<TemplateExercise> {
        let planned = match self {
            Self::Push => PUSH_EXERCISES,
            Self::Pull => PULL_EXERCISES,
            Self::Legs => LEGS_QUAD_EXERCISES,
            Self::Upper => UPPER_BODY_EXERCISES,
            Self::Lower => LEGS_HAMSTRING_EXERCISES,
            Self::FullBody => FULL_BODY_A_EXERCISES,
        };
        to_template_exercises(planned)
    }
}

impl fmt::Display for MiniPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
