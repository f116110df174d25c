// ABOUTME: Static day-template tables the split generators draw from
// ABOUTME: Each table is a titled, ordered list of exercises with set and rep targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use lockin_core::models::{DayOfWeek, TemplateExercise, WorkoutTemplate};

/// Planned exercise in a static table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedExercise {
    /// Catalog exercise id
    pub id: &'static str,
    /// Set count
    pub sets: u32,
    /// Rep target
    pub reps: &'static str,
}

/// Titled workout for one day, not yet bound to a weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTemplate {
    /// Workout title
    pub title: &'static str,
    /// Exercises in order
    pub exercises: &'static [PlannedExercise],
}

impl DayTemplate {
    /// Owned template exercises
    #[must_use]
    pub fn template_exercises(&self) -> Vec<TemplateExercise> {
        to_template_exercises(self.exercises)
    }

    /// Bind to a weekday under the given template id
    #[must_use]
    pub fn instantiate(&self, id: String, day_of_week: DayOfWeek) -> WorkoutTemplate {
        WorkoutTemplate {
            id,
            day_of_week,
            title: self.title.to_owned(),
            exercises: self.template_exercises(),
        }
    }
}

pub(crate) fn to_template_exercises(planned: &[PlannedExercise]) -> Vec<TemplateExercise> {
    planned
        .iter()
        .map(|ex| TemplateExercise::new(ex.id, ex.sets, ex.reps))
        .collect()
}

const fn ex(id: &'static str, sets: u32, reps: &'static str) -> PlannedExercise {
    PlannedExercise { id, sets, reps }
}

pub(crate) const PUSH_EXERCISES: &[PlannedExercise] = &[
    ex("chest_4", 3, "6-10"),
    ex("shoulder_22", 3, "10-12"),
    ex("chest_41", 3, "12-15"),
    ex("tricep_8", 3, "12-15"),
    ex("tricep_17", 3, "12-15"),
];

pub(crate) const PULL_EXERCISES: &[PlannedExercise] = &[
    ex("back_5", 3, "6-10"),
    ex("back_41", 3, "8-12"),
    ex("bicep_10", 3, "12-15"),
    ex("bicep_12", 3, "12-15"),
    ex("shoulder_23", 3, "15-25"),
];

pub(crate) const LEGS_QUAD_EXERCISES: &[PlannedExercise] = &[
    ex("leg_61", 3, "6-10"),
    ex("leg_19", 3, "8-12"),
    ex("leg_15", 3, "10-15"),
    ex("leg_36", 3, "12-15"),
    ex("calve_8", 3, "8-12"),
];

pub(crate) const LEGS_HAMSTRING_EXERCISES: &[PlannedExercise] = &[
    ex("leg_35", 3, "8-12"),
    ex("leg_50", 3, "8-10"),
    ex("leg_34", 3, "12-15"),
    ex("calve_7", 4, "12-20"),
    ex("ab_3", 4, "12-15"),
];

pub(crate) const FULL_BODY_A_EXERCISES: &[PlannedExercise] = &[
    ex("leg_61", 3, "8-12"),
    ex("chest_4", 3, "8-12"),
    ex("back_5", 3, "8-12"),
    ex("shoulder_20", 2, "12-15"),
    ex("ab_37", 3, "Hold"),
];

/// Push day
pub const PUSH: DayTemplate = DayTemplate {
    title: "Push",
    exercises: PUSH_EXERCISES,
};

/// Pull day
pub const PULL: DayTemplate = DayTemplate {
    title: "Pull",
    exercises: PULL_EXERCISES,
};

/// Quad-focused leg day
pub const LEGS_A: DayTemplate = DayTemplate {
    title: "Legs (Quad Focus)",
    exercises: LEGS_QUAD_EXERCISES,
};

/// Hamstring-focused leg day
pub const LEGS_B: DayTemplate = DayTemplate {
    title: "Legs (Hamstring Focus)",
    exercises: LEGS_HAMSTRING_EXERCISES,
};

/// Heavy upper day
pub const UPPER_A: DayTemplate = DayTemplate {
    title: "Upper Body (Strength)",
    exercises: &[
        ex("chest_4", 3, "5-8"),
        ex("back_5", 3, "5-8"),
        ex("shoulder_37", 3, "6-10"),
        ex("back_54", 3, "Failure"),
        ex("bicep_1", 2, "8-12"),
    ],
};

/// Higher-rep upper day
pub const UPPER_B: DayTemplate = DayTemplate {
    title: "Upper Body (Hypertrophy)",
    exercises: &[
        ex("chest_22", 3, "8-12"),
        ex("back_41", 3, "8-12"),
        ex("shoulder_22", 3, "10-15"),
        ex("back_9", 3, "10-15"),
        ex("tricep_17", 3, "10-15"),
    ],
};

/// Full body rotation, first day
pub const FULL_BODY_A: DayTemplate = DayTemplate {
    title: "Full Body A",
    exercises: FULL_BODY_A_EXERCISES,
};

/// Full body rotation, second day
pub const FULL_BODY_B: DayTemplate = DayTemplate {
    title: "Full Body B",
    exercises: &[
        ex("back_17", 3, "5-8"),
        ex("back_54", 3, "Failure"),
        ex("shoulder_37", 3, "8-12"),
        ex("leg_15", 3, "10-15"),
        ex("bicep_10", 2, "10-15"),
    ],
};

/// Full body rotation, third day
pub const FULL_BODY_C: DayTemplate = DayTemplate {
    title: "Full Body C",
    exercises: &[
        ex("leg_35", 3, "10-15"),
        ex("chest_22", 3, "10-15"),
        ex("back_9", 3, "10-15"),
        ex("leg_36", 2, "12-15"),
        ex("tricep_16", 2, "10-15"),
    ],
};

/// Chest and triceps: the pressing half of the push day
pub const CHEST: DayTemplate = DayTemplate {
    title: "Chest",
    exercises: &[
        ex("chest_4", 3, "6-10"),
        ex("chest_41", 3, "12-15"),
        ex("tricep_8", 3, "12-15"),
        ex("tricep_17", 3, "12-15"),
    ],
};

/// Back and biceps: the pull day without face pulls
pub const BACK: DayTemplate = DayTemplate {
    title: "Back & Biceps",
    exercises: &[
        ex("back_5", 3, "6-10"),
        ex("back_41", 3, "8-12"),
        ex("bicep_10", 3, "12-15"),
        ex("bicep_12", 3, "12-15"),
    ],
};

/// Shoulder day
pub const SHOULDERS: DayTemplate = DayTemplate {
    title: "Shoulders",
    exercises: &[
        ex("shoulder_37", 3, "6-10"),
        ex("shoulder_20", 3, "10-15"),
        ex("shoulder_44", 3, "12-15"),
        ex("shoulder_23", 3, "15-20"),
    ],
};

/// Arm day
pub const ARMS: DayTemplate = DayTemplate {
    title: "Arms",
    exercises: &[
        ex("bicep_1", 3, "8-12"),
        ex("tricep_4", 3, "8-12"),
        ex("bicep_13", 3, "10-15"),
        ex("tricep_17", 3, "10-15"),
    ],
};
