// ABOUTME: Integration tests for split-based plan generation and custom plans
// ABOUTME: Covers supported day counts, weekday layouts, presets and plan finalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use lockin::core::constants::plans::REST_DAY_TITLE;
use lockin::core::models::{DayOfWeek, TemplateExercise, WorkoutTemplate};
use lockin::intelligence::plan::{
    finalize_plan, generate_plan, list_available_splits, swap_exercise, CustomPlanBuilder,
    MiniPreset, PlanError, SplitKind,
};
use std::collections::HashSet;

#[test]
fn test_generate_plan_matches_supported_day_counts() {
    for split in SplitKind::ALL {
        for days in 1..=7_u8 {
            let plan = generate_plan(days, split.key());
            if split.supports(days) {
                let plan = plan.unwrap();
                assert_eq!(plan.len(), usize::from(days), "{split} with {days} days");
                assert!(plan.iter().all(|template| !template.exercises.is_empty()));
                let weekdays: HashSet<DayOfWeek> =
                    plan.iter().map(|template| template.day_of_week).collect();
                assert_eq!(weekdays.len(), plan.len(), "{split} repeats a weekday");
            } else {
                assert!(plan.is_none(), "{split} should not support {days} days");
            }
        }
    }
}

#[test]
fn test_three_day_ppl_layout() {
    let plan = generate_plan(3, "Push/Pull/Legs").unwrap();
    let layout: Vec<(DayOfWeek, &str)> = plan
        .iter()
        .map(|template| (template.day_of_week, template.title.as_str()))
        .collect();
    assert_eq!(
        layout,
        vec![
            (DayOfWeek::Monday, "Push"),
            (DayOfWeek::Wednesday, "Pull"),
            (DayOfWeek::Friday, "Legs (Quad Focus)"),
        ]
    );
}

#[test]
fn test_six_day_ppl_repeats_the_cycle() {
    let plan = generate_plan(6, "ppl").unwrap();
    for (first, second) in plan[..3].iter().zip(&plan[3..]) {
        assert_eq!(first.title, second.title);
        assert_eq!(first.exercises, second.exercises);
        assert_ne!(first.id, second.id);
    }
    assert_eq!(plan[5].day_of_week, DayOfWeek::Saturday);
}

#[test]
fn test_split_names_are_case_insensitive() {
    assert!(generate_plan(4, "upper/lower").is_some());
    assert!(generate_plan(4, "BRO SPLIT").is_some());
    assert!(generate_plan(3, "Push/Pull/Legs (PPL)").is_some());
    assert!(generate_plan(3, "Powerlifting").is_none());
}

#[test]
fn test_list_available_splits() {
    let keys: Vec<String> = list_available_splits(4)
        .into_iter()
        .map(|split| split.key)
        .collect();
    assert_eq!(keys, vec!["Upper/Lower", "Bro Split"]);

    let three: Vec<String> = list_available_splits(3)
        .into_iter()
        .map(|split| split.key)
        .collect();
    assert_eq!(three, vec!["Full Body", "Push/Pull/Legs"]);

    assert!(list_available_splits(7).is_empty());
}

#[test]
fn test_finalize_plan_drops_rest_and_empty_days() {
    let mut plan = generate_plan(3, "Full Body").unwrap();
    plan.push(WorkoutTemplate {
        id: "rest".into(),
        day_of_week: DayOfWeek::Sunday,
        title: REST_DAY_TITLE.into(),
        exercises: vec![TemplateExercise::new("chest_4", 3, "8-12")],
    });
    plan.push(WorkoutTemplate {
        id: "empty".into(),
        day_of_week: DayOfWeek::Saturday,
        title: "Cardio".into(),
        exercises: Vec::new(),
    });

    let finalized = finalize_plan(plan);
    assert_eq!(finalized.len(), 3);
    assert!(finalized
        .iter()
        .all(|template| template.title != REST_DAY_TITLE && !template.exercises.is_empty()));
}

#[test]
fn test_finalize_plan_keeps_first_template_per_weekday() {
    let day = |id: &str, title: &str| WorkoutTemplate {
        id: id.into(),
        day_of_week: DayOfWeek::Monday,
        title: title.into(),
        exercises: vec![TemplateExercise::new("chest_4", 3, "8-12")],
    };
    let plan = vec![
        day("monday-push", "Push"),
        day("monday-pull", "Pull"),
        WorkoutTemplate {
            day_of_week: DayOfWeek::Thursday,
            ..day("thursday-legs", "Legs")
        },
    ];

    let finalized = finalize_plan(plan);
    let ids: Vec<&str> = finalized.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["monday-push", "thursday-legs"]);
}

#[test]
fn test_custom_builder_presets_and_exercises() {
    let mut builder = CustomPlanBuilder::new();
    builder.apply_preset(DayOfWeek::Monday, MiniPreset::Push);
    assert_eq!(builder.day(DayOfWeek::Monday).title, "Push Day");

    builder.set_title(DayOfWeek::Thursday, "Arms").unwrap();
    assert!(builder.add_exercise(DayOfWeek::Thursday, "bicep_1"));
    assert!(!builder.add_exercise(DayOfWeek::Thursday, "bicep_1"));
    assert!(builder.add_exercise(DayOfWeek::Thursday, "tricep_4"));
    assert!(builder.remove_exercise(DayOfWeek::Thursday, "tricep_4"));

    assert_eq!(
        builder.set_title(DayOfWeek::Friday, "   "),
        Err(PlanError::BlankTitle)
    );

    let plan = builder.finalize();
    let days: Vec<DayOfWeek> = plan.iter().map(|template| template.day_of_week).collect();
    assert_eq!(days, vec![DayOfWeek::Monday, DayOfWeek::Thursday]);
    assert_eq!(plan[1].exercises.len(), 1);
}

#[test]
fn test_swap_exercise_in_plan() {
    let mut plan = generate_plan(3, "Push/Pull/Legs").unwrap();
    let push_id = plan[0].id.clone();
    let original = plan[0].exercises[0].clone();

    swap_exercise(&mut plan, &push_id, &original.exercise_id, "chest_32").unwrap();
    assert_eq!(plan[0].exercises[0].exercise_id, "chest_32");
    assert_eq!(plan[0].exercises[0].default_sets, original.default_sets);

    assert!(matches!(
        swap_exercise(&mut plan, "missing", "chest_32", "chest_4"),
        Err(PlanError::UnknownTemplate(_))
    ));
}
