// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, in-memory repositories, dates and sample records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `lockin`

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use lockin::core::models::{
    DailyLog, LoggedFood, MealName, Session, SetUpdate, WeightUnit, WorkoutTemplate,
};
use lockin::storage::{InMemoryStore, Storage, UserRepository};
use std::sync::Once;
use uuid::Uuid;

pub const USER: &str = "tester";

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Repository over a fresh in-memory storage
pub fn memory_repo() -> UserRepository {
    init_test_logging();
    UserRepository::new(Storage::in_memory())
}

/// Repository over the bare in-memory store, without change events
pub fn bare_repo() -> UserRepository<InMemoryStore> {
    init_test_logging();
    UserRepository::new(InMemoryStore::new())
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}

/// A logged food entry
pub fn logged(food_id: &str, servings: f64, logged_at: DateTime<Utc>) -> LoggedFood {
    LoggedFood {
        id: Uuid::new_v4().to_string(),
        food_id: food_id.to_owned(),
        servings,
        logged_at,
    }
}

/// Daily log with `entries` in their meals and the given steps
pub fn daily_log(
    on: NaiveDate,
    entries: Vec<(MealName, LoggedFood)>,
    steps: u32,
) -> DailyLog {
    let mut log = DailyLog::empty(on);
    for (meal, entry) in entries {
        log.meal_mut(meal).foods.push(entry);
    }
    log.steps = steps;
    log
}

/// Session started from `template` on `on` with every set at `reps` x `weight`
pub fn performed_session(
    template: &WorkoutTemplate,
    on: NaiveDate,
    reps: u32,
    weight: f64,
) -> Session {
    let mut session = Session::start(template, on, WeightUnit::Kg);
    let now = on.and_hms_opt(18, 0, 0).unwrap().and_utc();
    for exercise in &mut session.exercises {
        for set in &mut exercise.sets {
            set.apply(
                SetUpdate {
                    reps: Some(reps),
                    weight: Some(weight),
                },
                now,
            );
        }
    }
    session
}

/// Performed session finished at 19:00 on its date
pub fn completed_session(template: &WorkoutTemplate, on: NaiveDate) -> Session {
    let mut session = performed_session(template, on, 10, 50.0);
    session.finish(on.and_hms_opt(19, 0, 0).unwrap().and_utc());
    session
}
