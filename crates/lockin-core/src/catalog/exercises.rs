// ABOUTME: Built-in exercise catalog grouped by muscle group
// ABOUTME: Lookup by id and case-insensitive name search for the exercise picker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::Exercise;

/// Catalog entry: id and display name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Stable id referenced by templates and sessions
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
}

/// Exercises filed under one muscle group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseGroup {
    /// Muscle group name
    pub group: &'static str,
    /// Exercises in display order
    pub exercises: &'static [CatalogEntry],
}

const fn entry(id: &'static str, name: &'static str) -> CatalogEntry {
    CatalogEntry { id, name }
}

/// Every catalog exercise, grouped
pub const EXERCISE_GROUPS: &[ExerciseGroup] = &[
    ExerciseGroup {
        group: "Chest",
        exercises: &[
            entry("chest_4", "Bench Press (Barbell)"),
            entry("chest_9", "Chest Dip"),
            entry("chest_22", "Incline Bench Press (Dumbbell)"),
            entry("chest_27", "Pec Deck (Machine)"),
            entry("chest_32", "Push Up"),
            entry("chest_41", "Standing Cable Chest Fly"),
        ],
    },
    ExerciseGroup {
        group: "Back",
        exercises: &[
            entry("back_5", "Bent Over Row (Barbell)"),
            entry("back_9", "Seated Cable Row"),
            entry("back_17", "Deadlift (Barbell)"),
            entry("back_41", "Lat Pulldown (Cable)"),
            entry("back_54", "Pull Up"),
            entry("back_60", "Single Arm Row (Dumbbell)"),
            entry("back_69", "Straight Arm Lat Pulldown (Cable)"),
        ],
    },
    ExerciseGroup {
        group: "Shoulders",
        exercises: &[
            entry("shoulder_20", "Lateral Raise (Dumbbell)"),
            entry("shoulder_22", "Shoulder Press (Dumbbell)"),
            entry("shoulder_23", "Face Pull"),
            entry("shoulder_34", "Seated Shoulder Press (Machine)"),
            entry("shoulder_37", "Overhead Press (Barbell)"),
            entry("shoulder_44", "Reverse Fly (Dumbbell)"),
        ],
    },
    ExerciseGroup {
        group: "Biceps",
        exercises: &[
            entry("bicep_1", "Bicep Curl (Barbell)"),
            entry("bicep_10", "Bicep Curl (Dumbbell)"),
            entry("bicep_12", "Hammer Curl (Dumbbell)"),
            entry("bicep_13", "Preacher Curl (Machine)"),
        ],
    },
    ExerciseGroup {
        group: "Triceps",
        exercises: &[
            entry("tricep_4", "Skullcrusher (Barbell)"),
            entry("tricep_8", "Triceps Extension (Dumbbell)"),
            entry("tricep_16", "Triceps Dip"),
            entry("tricep_17", "Triceps Rope Pushdown"),
        ],
    },
    ExerciseGroup {
        group: "Legs",
        exercises: &[
            entry("leg_15", "Lunge (Dumbbell)"),
            entry("leg_19", "Glute Ham Raise"),
            entry("leg_34", "Leg Extension (Machine)"),
            entry("leg_35", "Leg Press (Machine)"),
            entry("leg_36", "Lying Leg Curl (Machine)"),
            entry("leg_50", "Romanian Deadlift (Barbell)"),
            entry("leg_61", "Squat (Barbell)"),
        ],
    },
    ExerciseGroup {
        group: "Calves",
        exercises: &[
            entry("calve_7", "Seated Calf Raise"),
            entry("calve_8", "Standing Calf Raise (Smith)"),
        ],
    },
    ExerciseGroup {
        group: "Abs",
        exercises: &[
            entry("ab_3", "Cable Crunch"),
            entry("ab_12", "Hanging Leg Raise"),
            entry("ab_37", "Plank"),
        ],
    },
];

/// Look up an exercise by id
#[must_use]
pub fn find_exercise(id: &str) -> Option<Exercise> {
    EXERCISE_GROUPS.iter().find_map(|group| {
        group
            .exercises
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| Exercise {
                id: entry.id.to_owned(),
                name: entry.name.to_owned(),
                muscle_group: group.group.to_owned(),
            })
    })
}

/// Groups whose exercises contain `term` (case-insensitive); empty groups dropped.
///
/// A blank term returns the whole catalog.
#[must_use]
pub fn search_exercises(term: &str) -> Vec<(&'static str, Vec<CatalogEntry>)> {
    let needle = term.trim().to_lowercase();
    EXERCISE_GROUPS
        .iter()
        .map(|group| {
            let matches = group
                .exercises
                .iter()
                .filter(|entry| needle.is_empty() || entry.name.to_lowercase().contains(&needle))
                .copied()
                .collect::<Vec<_>>();
            (group.group, matches)
        })
        .filter(|(_, matches)| !matches.is_empty())
        .collect()
}
