// ABOUTME: Nutrition commands for lockin-cli
// ABOUTME: Logs foods, steps and water, and lists the food database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, bail, Result};
use chrono::{NaiveDate, Utc};
use lockin::core::models::MealName;
use lockin::services::nutrition::{add_food, daily_log, food_database, set_steps, set_water};
use lockin::storage::UserRepository;

use crate::helpers::display::display_daily_log;
use crate::helpers::today;

/// Log servings of a food
pub async fn add(
    repo: &UserRepository,
    user: &str,
    meal: &str,
    food_id: &str,
    servings: f64,
    date: Option<NaiveDate>,
) -> Result<()> {
    let meal = MealName::parse(meal).ok_or_else(|| anyhow!("Unknown meal '{meal}'"))?;
    let foods = food_database(repo, user).await?;
    if foods.find(food_id).is_none() {
        bail!("Unknown food '{food_id}'; list foods with `lockin-cli nutrition foods`");
    }
    let log = add_food(
        repo,
        user,
        date.unwrap_or_else(today),
        meal,
        food_id,
        servings,
        Utc::now(),
    )
    .await?;
    display_daily_log(&log, &foods);
    Ok(())
}

/// Set steps for a day
pub async fn steps(
    repo: &UserRepository,
    user: &str,
    steps: u32,
    date: Option<NaiveDate>,
) -> Result<()> {
    let log = set_steps(repo, user, date.unwrap_or_else(today), steps).await?;
    println!("{}: {} steps", log.date, log.steps);
    Ok(())
}

/// Set water intake for a day
pub async fn water(
    repo: &UserRepository,
    user: &str,
    millilitres: f64,
    date: Option<NaiveDate>,
) -> Result<()> {
    let log = set_water(repo, user, date.unwrap_or_else(today), millilitres).await?;
    println!("{}: {} ml water", log.date, log.water_intake);
    Ok(())
}

/// List foods matching `term`
pub async fn foods(repo: &UserRepository, user: &str, term: &str) -> Result<()> {
    let database = food_database(repo, user).await?;
    for food in database.search(term) {
        let origin = if food.is_custom { " (custom)" } else { "" };
        println!(
            "{:<14} {:<20} {:>5} kcal / {}{origin}",
            food.id, food.name, food.calories, food.serving_size
        );
    }
    Ok(())
}

/// Show a day's log
pub async fn show(repo: &UserRepository, user: &str, date: Option<NaiveDate>) -> Result<()> {
    let log = daily_log(repo, user, date.unwrap_or_else(today)).await?;
    let foods = food_database(repo, user).await?;
    display_daily_log(&log, &foods);
    Ok(())
}
