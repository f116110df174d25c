// ABOUTME: Integration tests for daily log mutations and custom foods
// ABOUTME: Covers lazy log creation, food logging, steps, water and custom food validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{at, date, memory_repo, USER};
use lockin::core::errors::ErrorCode;
use lockin::core::models::MealName;
use lockin::intelligence::nutrition::log_calories;
use lockin::services::nutrition::{
    add_food, create_custom_food, daily_log, food_database, remove_food, set_steps, set_water,
    NewFood,
};

fn protein_bar() -> NewFood {
    NewFood {
        name: "  Protein Bar ".into(),
        calories: 210.0,
        protein: 20.0,
        carbs: 22.0,
        fat: 7.0,
        serving_size: "1 bar".into(),
    }
}

#[tokio::test]
async fn test_daily_log_is_created_lazily() -> Result<()> {
    let repo = memory_repo();
    let today = date(2026, 10, 16);

    let log = daily_log(&repo, USER, today).await?;
    assert_eq!(log.date, today);
    assert_eq!(log.meals.len(), 4);
    assert_eq!(log.steps, 0);
    assert!(repo.daily_logs(USER).await?.is_empty());

    set_steps(&repo, USER, today, 8_500).await?;
    let logs = repo.daily_logs(USER).await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].steps, 8_500);
    Ok(())
}

#[tokio::test]
async fn test_add_and_remove_food() -> Result<()> {
    let repo = memory_repo();
    let today = date(2026, 10, 16);

    add_food(&repo, USER, today, MealName::Breakfast, "food_7", 1.5, at(2026, 10, 16, 7, 0))
        .await?;
    let log = add_food(&repo, USER, today, MealName::Snacks, "food_8", 1.0, at(2026, 10, 16, 15, 0))
        .await?;

    let foods = food_database(&repo, USER).await?;
    assert!((log_calories(&log, &foods) - (154.0 * 1.5 + 164.0)).abs() < 1e-9);

    let entry_id = log.meal(MealName::Snacks).unwrap().foods[0].id.clone();
    let log = remove_food(&repo, USER, today, &entry_id).await?;
    assert!(log.meal(MealName::Snacks).unwrap().foods.is_empty());
    assert!((log_calories(&log, &foods) - 231.0).abs() < 1e-9);

    let error = remove_food(&repo, USER, today, &entry_id).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    Ok(())
}

#[tokio::test]
async fn test_logs_are_upserted_by_date() -> Result<()> {
    let repo = memory_repo();
    set_steps(&repo, USER, date(2026, 10, 15), 4_000).await?;
    set_steps(&repo, USER, date(2026, 10, 16), 6_000).await?;
    set_water(&repo, USER, date(2026, 10, 16), 1_500.0).await?;
    set_steps(&repo, USER, date(2026, 10, 16), 7_000).await?;

    let logs = repo.daily_logs(USER).await?;
    assert_eq!(logs.len(), 2);
    let today = daily_log(&repo, USER, date(2026, 10, 16)).await?;
    assert_eq!(today.steps, 7_000);
    assert!((today.water_intake - 1_500.0).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn test_invalid_amounts_are_rejected() {
    let repo = memory_repo();
    let today = date(2026, 10, 16);

    let error = add_food(&repo, USER, today, MealName::Lunch, "food_1", 0.0, at(2026, 10, 16, 12, 0))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    let error = set_water(&repo, USER, today, -5.0).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_create_custom_food() -> Result<()> {
    let repo = memory_repo();
    let food = create_custom_food(&repo, USER, protein_bar()).await?;
    assert!(food.id.starts_with("custom-"));
    assert_eq!(food.name, "Protein Bar");
    assert!(food.is_custom);

    let database = food_database(&repo, USER).await?;
    assert_eq!(database.find(&food.id), Some(&food));
    assert_eq!(database.all().len(), 11);
    assert_eq!(database.search("protein").len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_custom_food_validation() {
    let repo = memory_repo();

    let blank = NewFood {
        name: "   ".into(),
        ..protein_bar()
    };
    let error = create_custom_food(&repo, USER, blank).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    let no_calories = NewFood {
        calories: 0.0,
        ..protein_bar()
    };
    let error = create_custom_food(&repo, USER, no_calories)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    assert!(repo.custom_foods(USER).await.unwrap().is_empty());
}
