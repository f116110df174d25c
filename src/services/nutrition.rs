// ABOUTME: Daily log mutations and custom food creation
// ABOUTME: Logs are created lazily and upserted by date on the first change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::storage::{RecordStore, UserRepository};
use chrono::{DateTime, NaiveDate, Utc};
use lockin_core::catalog::FoodDatabase;
use lockin_core::errors::{AppError, AppResult};
use lockin_core::models::{DailyLog, FoodItem, LoggedFood, MealName};
use tracing::{debug, info};
use uuid::Uuid;

/// Fields of a user-created food
#[derive(Debug, Clone, PartialEq)]
pub struct NewFood {
    /// Food name
    pub name: String,
    /// Calories per serving
    pub calories: f64,
    /// Protein per serving (grams)
    pub protein: f64,
    /// Carbohydrates per serving (grams)
    pub carbs: f64,
    /// Fat per serving (grams)
    pub fat: f64,
    /// Serving description
    pub serving_size: String,
}

/// Stored log for `date`, or a fresh empty one that is not persisted
///
/// # Errors
///
/// Returns an error if the daily logs record cannot be read
pub async fn daily_log<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    date: NaiveDate,
) -> AppResult<DailyLog> {
    Ok(repo
        .daily_logs(user)
        .await?
        .into_iter()
        .find(|log| log.date == date)
        .unwrap_or_else(|| DailyLog::empty(date)))
}

/// Apply `change` to the log for `date`, creating it if needed, and save
async fn modify_log<S, F>(
    repo: &UserRepository<S>,
    user: &str,
    date: NaiveDate,
    change: F,
) -> AppResult<DailyLog>
where
    S: RecordStore,
    F: FnOnce(&mut DailyLog) -> AppResult<()> + Send,
{
    let mut logs = repo.daily_logs(user).await?;
    let index = if let Some(index) = logs.iter().position(|log| log.date == date) {
        index
    } else {
        logs.push(DailyLog::empty(date));
        logs.len() - 1
    };
    change(&mut logs[index])?;
    let updated = logs[index].clone();
    repo.save_daily_logs(user, &logs).await?;
    Ok(updated)
}

/// Log `servings` of a food into a meal slot
///
/// # Errors
///
/// Returns `InvalidInput` for non-positive servings, or a storage error
pub async fn add_food<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    date: NaiveDate,
    meal: MealName,
    food_id: &str,
    servings: f64,
    now: DateTime<Utc>,
) -> AppResult<DailyLog> {
    if !(servings.is_finite() && servings > 0.0) {
        return Err(AppError::invalid_input(format!(
            "Servings must be positive, got {servings}"
        )));
    }
    let entry = LoggedFood {
        id: Uuid::new_v4().to_string(),
        food_id: food_id.to_owned(),
        servings,
        logged_at: now,
    };
    debug!(%date, %meal, food_id, servings, "Logging food");
    modify_log(repo, user, date, |log| {
        log.meal_mut(meal).foods.push(entry);
        Ok(())
    })
    .await
}

/// Remove a logged food entry from whichever slot holds it
///
/// # Errors
///
/// Returns `ResourceNotFound` when no entry has that id
pub async fn remove_food<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    date: NaiveDate,
    entry_id: &str,
) -> AppResult<DailyLog> {
    modify_log(repo, user, date, |log| {
        let mut removed = false;
        for meal in &mut log.meals {
            let before = meal.foods.len();
            meal.foods.retain(|entry| entry.id != entry_id);
            removed |= meal.foods.len() != before;
        }
        if removed {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Logged food {entry_id}")))
        }
    })
    .await
}

/// Replace the step count for `date`
///
/// # Errors
///
/// Returns an error if the daily logs record cannot be written
pub async fn set_steps<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    date: NaiveDate,
    steps: u32,
) -> AppResult<DailyLog> {
    modify_log(repo, user, date, |log| {
        log.steps = steps;
        Ok(())
    })
    .await
}

/// Replace the water intake (ml) for `date`
///
/// # Errors
///
/// Returns `InvalidInput` for a negative amount, or a storage error
pub async fn set_water<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    date: NaiveDate,
    millilitres: f64,
) -> AppResult<DailyLog> {
    if !(millilitres.is_finite() && millilitres >= 0.0) {
        return Err(AppError::invalid_input(format!(
            "Water intake cannot be negative, got {millilitres}"
        )));
    }
    modify_log(repo, user, date, |log| {
        log.water_intake = millilitres;
        Ok(())
    })
    .await
}

/// Create and persist a custom food
///
/// # Errors
///
/// Returns `InvalidInput` for a blank name or non-positive calories
pub async fn create_custom_food<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    food: NewFood,
) -> AppResult<FoodItem> {
    let name = food.name.trim();
    if name.is_empty() {
        return Err(AppError::invalid_input("Food name cannot be empty"));
    }
    if !(food.calories.is_finite() && food.calories > 0.0) {
        return Err(AppError::invalid_input(format!(
            "Calories must be positive, got {}",
            food.calories
        )));
    }
    let item = FoodItem {
        id: format!("custom-{}", Uuid::new_v4()),
        name: name.to_owned(),
        calories: food.calories,
        protein: food.protein.max(0.0),
        carbs: food.carbs.max(0.0),
        fat: food.fat.max(0.0),
        serving_size: food.serving_size,
        is_custom: true,
    };
    let mut custom = repo.custom_foods(user).await?;
    custom.push(item.clone());
    repo.save_custom_foods(user, &custom).await?;
    info!(food_id = %item.id, name = %item.name, "Custom food created");
    Ok(item)
}

/// Built-in catalog combined with the user's custom foods
///
/// # Errors
///
/// Returns an error if the custom foods record cannot be read
pub async fn food_database<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
) -> AppResult<FoodDatabase> {
    Ok(FoodDatabase::new(repo.custom_foods(user).await?))
}
