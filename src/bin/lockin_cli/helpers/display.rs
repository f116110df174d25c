// ABOUTME: Output formatting helpers for lockin-cli
// ABOUTME: Plain-text rendering of plans, sessions, logs and charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use lockin::core::catalog::FoodDatabase;
use lockin::core::models::{DailyLog, Session, WorkoutTemplate};
use lockin::intelligence::nutrition::{log_calories, macro_totals, meal_totals};
use lockin::intelligence::training::{DayStatus, ScheduleDay};

const BAR_WIDTH: usize = 30;

/// Horizontal bar scaled so `max` fills the full width
pub fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(filled.clamp(1, BAR_WIDTH))
}

/// Print a weekly plan, one template per training day
pub fn display_plan(plan: &[WorkoutTemplate]) {
    for template in plan {
        println!("{:<10} {}", template.day_of_week.as_str(), template.title);
        for planned in &template.exercises {
            let name = lockin::core::catalog::find_exercise(&planned.exercise_id)
                .map_or_else(|| planned.exercise_id.clone(), |exercise| exercise.name);
            println!(
                "           - {name} ({} x {})",
                planned.default_sets, planned.default_reps
            );
        }
    }
}

/// Print the Sunday-to-Saturday schedule
pub fn display_schedule(schedule: &[ScheduleDay]) {
    for day in schedule {
        let status = match &day.status {
            DayStatus::Rest => "rest".to_owned(),
            DayStatus::Done => "done".to_owned(),
            DayStatus::InProgress => "in progress".to_owned(),
            DayStatus::Planned(title) => format!("planned: {title}"),
        };
        let marker = if day.is_today { ">" } else { " " };
        println!("{marker} {} {}  {status}", day.day.short_name(), day.date);
    }
}

/// Print a session with every set
pub fn display_session(session: &Session) {
    println!("Session {} ({}, {:?})", session.id, session.date, session.status);
    for exercise in &session.exercises {
        println!("  {} [{}] {}", exercise.name, exercise.muscle_group, exercise.id);
        for (index, set) in exercise.sets.iter().enumerate() {
            let done = if set.is_completed() { "x" } else { " " };
            println!(
                "    [{done}] set {}: {} x {} {} = {}",
                index + 1,
                set.reps,
                set.weight,
                session.unit,
                set.volume
            );
        }
    }
    println!("  Total volume: {} {}", session.computed_volume(), session.unit);
}

/// Print a day's meals with per-meal and daily totals
pub fn display_daily_log(log: &DailyLog, foods: &FoodDatabase) {
    println!("{}", log.date);
    for meal in &log.meals {
        let totals = meal_totals(meal, foods);
        println!("  {} ({:.0} kcal)", meal.name, totals.calories);
        for entry in &meal.foods {
            let name = foods
                .find(&entry.food_id)
                .map_or("Unknown food", |food| food.name.as_str());
            println!("    - {name} x{} [{}]", entry.servings, entry.id);
        }
    }
    let totals = macro_totals(log, foods);
    println!(
        "  Total: {:.0} kcal, P {:.1}g C {:.1}g F {:.1}g",
        log_calories(log, foods),
        totals.protein,
        totals.carbs,
        totals.fat
    );
    println!("  Steps: {}  Water: {} ml", log.steps, log.water_intake);
}
