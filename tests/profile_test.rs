// ABOUTME: Integration tests for profile persistence and legacy record backfill
// ABOUTME: Covers derived age, onboarding flag, default goals and partial stored JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{at, date, memory_repo, USER};
use lockin::core::models::{LengthUnit, Measurements, Sex, UserGoals, UserProfile};
use lockin::services::profile::{load_profile, save_profile};
use lockin::storage::{RecordKind, RecordStore};

#[tokio::test]
async fn test_save_profile_derives_fields() -> Result<()> {
    let repo = memory_repo();
    let now = at(2026, 10, 16, 8, 0);
    let profile = UserProfile {
        name: "Sam".into(),
        dob: Some(date(1991, 10, 17)),
        sex: Some(Sex::Male),
        weight: 82.5,
        height: 180.0,
        ..UserProfile::default()
    };

    let saved = save_profile(&repo, USER, profile, now).await?;
    assert_eq!(saved.age, 34);
    assert!(saved.onboarding_completed);
    assert_eq!(saved.last_updated, Some(now));

    let loaded = load_profile(&repo, USER).await?;
    assert_eq!(loaded, saved);
    Ok(())
}

#[tokio::test]
async fn test_missing_profile_is_default() -> Result<()> {
    let repo = memory_repo();
    let profile = load_profile(&repo, USER).await?;
    assert!(!profile.onboarding_completed);
    assert_eq!(profile.goals, UserGoals::default());
    assert_eq!(profile.measurements, Measurements::default());
    Ok(())
}

#[tokio::test]
async fn test_legacy_profile_is_backfilled() -> Result<()> {
    let repo = memory_repo();
    let legacy = r#"{"name":"Old Timer","age":40,"height":70,"heightUnit":"in","weight":190,"onboardingCompleted":true}"#;
    repo.store()
        .set(&RecordKind::Profile.key_for(USER), legacy.to_owned())
        .await?;

    let profile = load_profile(&repo, USER).await?;
    assert_eq!(profile.name, "Old Timer");
    assert_eq!(profile.age, 40);
    assert_eq!(profile.height_unit, LengthUnit::In);
    assert_eq!(profile.measurement_unit, LengthUnit::Cm);
    assert_eq!(profile.goals.calorie_target, 2000);
    assert_eq!(profile.goals.step_target, 10_000);
    assert!(profile.measurements.waist.abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_partial_goals_are_completed_from_defaults() -> Result<()> {
    let repo = memory_repo();
    let stored = r#"{"name":"Kim","goals":{"calorieTarget":1800},"measurements":{"waist":81.0}}"#;
    repo.store()
        .set(&RecordKind::Profile.key_for(USER), stored.to_owned())
        .await?;

    let profile = load_profile(&repo, USER).await?;
    assert_eq!(profile.goals.calorie_target, 1800);
    assert_eq!(profile.goals.step_target, 10_000);
    assert!((profile.measurements.waist - 81.0).abs() < f64::EPSILON);
    assert!(profile.measurements.chest.abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_null_nested_records_are_backfilled() -> Result<()> {
    let repo = memory_repo();
    let stored = r#"{"name":"Sam","weight":80,"goals":null,"measurements":null,"measurementUnit":null}"#;
    repo.store()
        .set(&RecordKind::Profile.key_for(USER), stored.to_owned())
        .await?;

    let profile = load_profile(&repo, USER).await?;
    assert_eq!(profile.name, "Sam");
    assert!((profile.weight - 80.0).abs() < f64::EPSILON);
    assert_eq!(profile.goals, UserGoals::default());
    assert_eq!(profile.measurements, Measurements::default());
    assert_eq!(profile.measurement_unit, LengthUnit::Cm);
    Ok(())
}
