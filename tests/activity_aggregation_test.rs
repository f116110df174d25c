// ABOUTME: Integration tests for day, week and month activity views
// ABOUTME: Covers calorie totals, dangling food references, normalization and navigation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Datelike, Utc};
use common::{at, daily_log, date, logged};
use lockin::core::catalog::FoodDatabase;
use lockin::core::models::{DailyLog, MealName};
use lockin::intelligence::activity::{
    hourly_activity, period_view, ActivityMetric, Period, PeriodDetail,
};
use lockin::intelligence::nutrition::{log_calories, macro_totals, rounded_log_calories};

fn sample_logs() -> Vec<DailyLog> {
    vec![
        daily_log(
            date(2026, 10, 16),
            vec![
                (MealName::Breakfast, logged("food_1", 1.0, at(2026, 10, 16, 7, 30))),
                (MealName::Dinner, logged("food_10", 1.0, at(2026, 10, 16, 19, 0))),
            ],
            6000,
        ),
        daily_log(date(2026, 10, 12), Vec::new(), 12_000),
        daily_log(
            date(2026, 10, 3),
            vec![(MealName::Lunch, logged("food_7", 2.0, at(2026, 10, 3, 12, 15)))],
            5000,
        ),
    ]
}

#[test]
fn test_calorie_total_of_empty_log_is_zero() {
    let foods = FoodDatabase::builtin();
    let log = DailyLog::empty(date(2026, 10, 16));
    assert!(log_calories(&log, &foods).abs() < f64::EPSILON);

    let mut no_meals = log;
    no_meals.meals.clear();
    assert_eq!(rounded_log_calories(&no_meals, &foods), 0);
}

#[test]
fn test_unknown_food_contributes_nothing() {
    let foods = FoodDatabase::builtin();
    let on = date(2026, 10, 16);
    let known = daily_log(
        on,
        vec![(MealName::Lunch, logged("food_1", 2.0, at(2026, 10, 16, 12, 0)))],
        0,
    );
    let mut with_dangling = known.clone();
    with_dangling
        .meal_mut(MealName::Snacks)
        .foods
        .push(logged("deleted-food", 3.0, at(2026, 10, 16, 15, 0)));

    assert!((log_calories(&known, &foods) - 330.0).abs() < 1e-9);
    assert!((log_calories(&with_dangling, &foods) - 330.0).abs() < 1e-9);
    assert!((macro_totals(&with_dangling, &foods).protein - 62.0).abs() < 1e-9);
}

#[test]
fn test_week_view_calories() {
    let foods = FoodDatabase::builtin();
    let view = period_view(
        &sample_logs(),
        &foods,
        ActivityMetric::Calories,
        Period::Week,
        date(2026, 10, 16),
        &Utc,
    );

    assert_eq!(view.start, date(2026, 10, 11));
    assert_eq!(view.end, date(2026, 10, 17));
    assert_eq!(view.title, "11–17 October");
    assert_eq!(view.total, 165 + 206);

    let PeriodDetail::Week { points } = &view.detail else {
        panic!("expected week detail, got {:?}", view.detail);
    };
    assert_eq!(points.len(), 7);
    assert_eq!(points[0].label, "Sun");
    assert_eq!(points[5].date, date(2026, 10, 16));
    assert_eq!(points[5].value, 371);
    assert_eq!(points[1].value, 0);
}

#[test]
fn test_week_view_steps() {
    let foods = FoodDatabase::builtin();
    let view = period_view(
        &sample_logs(),
        &foods,
        ActivityMetric::Steps,
        Period::Week,
        date(2026, 10, 14),
        &Utc,
    );
    assert_eq!(view.total, 18_000);
    assert_eq!(view.days.len(), 7);
}

#[test]
fn test_thirty_day_month_has_one_point_per_day() {
    let foods = FoodDatabase::builtin();
    let logs = vec![
        daily_log(date(2026, 9, 1), Vec::new(), 4000),
        daily_log(date(2026, 9, 30), Vec::new(), 8000),
    ];
    let view = period_view(
        &logs,
        &foods,
        ActivityMetric::Steps,
        Period::Month,
        date(2026, 9, 15),
        &Utc,
    );
    assert_eq!(view.title, "September 2026");
    assert_eq!(view.total, 12_000);

    let PeriodDetail::Month { points, max, .. } = &view.detail else {
        panic!("expected month detail, got {:?}", view.detail);
    };
    assert_eq!(points.len(), 30);
    assert_eq!(*max, 8000);
    assert_eq!(points.last().unwrap().date, date(2026, 9, 30));
    assert!((points[29].magnitude - 1.0).abs() < f64::EPSILON);
    assert!((points[0].magnitude - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_month_view_normalizes_to_largest_day() {
    let foods = FoodDatabase::builtin();
    let view = period_view(
        &sample_logs(),
        &foods,
        ActivityMetric::Steps,
        Period::Month,
        date(2026, 10, 16),
        &Utc,
    );
    assert_eq!(view.title, "October 2026");

    let PeriodDetail::Month { points, max, grid } = &view.detail else {
        panic!("expected month detail, got {:?}", view.detail);
    };
    assert_eq!(points.len(), 31);
    assert_eq!(*max, 12_000);

    let peak = points
        .iter()
        .find(|point| point.date == date(2026, 10, 12))
        .unwrap();
    assert!((peak.magnitude - 1.0).abs() < f64::EPSILON);
    assert!(points
        .iter()
        .all(|point| (0.0..=1.0).contains(&point.magnitude)));

    let first = date(2026, 10, 1);
    let column = first.weekday().num_days_from_sunday() as usize;
    assert_eq!(grid[0][column], Some(first));
    let filled = grid.iter().flatten().filter(|cell| cell.is_some()).count();
    assert_eq!(filled, 31);
}

#[test]
fn test_month_view_without_data_has_unit_max() {
    let foods = FoodDatabase::builtin();
    let view = period_view(
        &[],
        &foods,
        ActivityMetric::Calories,
        Period::Month,
        date(2026, 2, 10),
        &Utc,
    );
    let PeriodDetail::Month { points, max, .. } = &view.detail else {
        panic!("expected month detail");
    };
    assert_eq!(*max, 1);
    assert_eq!(points.len(), 28);
    assert!(points.iter().all(|point| point.magnitude.abs() < f64::EPSILON));
}

#[test]
fn test_day_view_hourly_and_meals() {
    let foods = FoodDatabase::builtin();
    let view = period_view(
        &sample_logs(),
        &foods,
        ActivityMetric::Calories,
        Period::Day,
        date(2026, 10, 16),
        &Utc,
    );
    assert_eq!(view.title, "Friday, October 16");
    assert_eq!(view.total, 371);

    let PeriodDetail::Day { hourly, meals } = &view.detail else {
        panic!("expected day detail");
    };
    assert!((hourly[7] - 165.0).abs() < 1e-9);
    assert!((hourly[19] - 206.0).abs() < 1e-9);
    assert!((hourly.iter().sum::<f64>() - 371.0).abs() < 1e-9);

    let names: Vec<MealName> = meals.iter().map(|meal| meal.name).collect();
    assert_eq!(names, vec![MealName::Breakfast, MealName::Dinner]);
    assert_eq!(meals[1].calories, 206);
}

#[test]
fn test_day_view_for_steps_has_no_breakdown() {
    let foods = FoodDatabase::builtin();
    let view = period_view(
        &sample_logs(),
        &foods,
        ActivityMetric::Steps,
        Period::Day,
        date(2026, 10, 16),
        &Utc,
    );
    assert_eq!(view.total, 6000);
    let PeriodDetail::Day { hourly, meals } = &view.detail else {
        panic!("expected day detail");
    };
    assert!(hourly.iter().all(|value| value.abs() < f64::EPSILON));
    assert!(meals.is_empty());
}

#[test]
fn test_views_are_idempotent() {
    let foods = FoodDatabase::builtin();
    let logs = sample_logs();
    for period in [Period::Day, Period::Week, Period::Month] {
        let first = period_view(
            &logs,
            &foods,
            ActivityMetric::Calories,
            period,
            date(2026, 10, 16),
            &Utc,
        );
        let second = period_view(
            &logs,
            &foods,
            ActivityMetric::Calories,
            period,
            date(2026, 10, 16),
            &Utc,
        );
        assert_eq!(first, second);
    }
}

#[test]
fn test_navigation_moves_whole_periods() {
    let anchor = date(2026, 10, 16);
    assert_eq!(Period::Day.navigate(anchor, -1), date(2026, 10, 15));
    assert_eq!(Period::Week.navigate(anchor, 1), date(2026, 10, 23));
    assert_eq!(Period::Month.navigate(anchor, -1), date(2026, 9, 16));
    assert_eq!(Period::Month.navigate(date(2026, 3, 31), -1), date(2026, 2, 28));
}

#[test]
fn test_hourly_activity_counts_events() {
    let logs = sample_logs();
    let buckets = hourly_activity(&[], &logs, &Utc);
    assert_eq!(buckets[7], 1);
    assert_eq!(buckets[12], 1);
    assert_eq!(buckets[19], 1);
    assert_eq!(buckets.iter().sum::<u32>(), 3);
}
