// ABOUTME: Calorie and macro totals for daily logs and meals
// ABOUTME: Logged foods whose id is missing from the food database count as zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use lockin_core::catalog::FoodDatabase;
use lockin_core::models::{DailyLog, LoggedFood, MacroTotals, Meal};

/// Macros contributed by one logged food; zero when the food is unknown
#[must_use]
pub fn logged_food_macros(entry: &LoggedFood, foods: &FoodDatabase) -> MacroTotals {
    foods
        .find(&entry.food_id)
        .map_or_else(MacroTotals::default, |food| {
            MacroTotals::of(food, entry.servings)
        })
}

/// Calories contributed by one logged food
#[must_use]
pub fn logged_food_calories(entry: &LoggedFood, foods: &FoodDatabase) -> f64 {
    foods
        .find(&entry.food_id)
        .map_or(0.0, |food| food.calories * entry.servings)
}

/// Macro totals for one meal slot
#[must_use]
pub fn meal_totals(meal: &Meal, foods: &FoodDatabase) -> MacroTotals {
    let mut totals = MacroTotals::default();
    for entry in &meal.foods {
        totals += logged_food_macros(entry, foods);
    }
    totals
}

/// Macro totals for a whole day
#[must_use]
pub fn macro_totals(log: &DailyLog, foods: &FoodDatabase) -> MacroTotals {
    let mut totals = MacroTotals::default();
    for meal in &log.meals {
        totals += meal_totals(meal, foods);
    }
    totals
}

/// Calories consumed on a day: Σ meals Σ foods `calories × servings`
#[must_use]
pub fn log_calories(log: &DailyLog, foods: &FoodDatabase) -> f64 {
    log.foods()
        .map(|entry| logged_food_calories(entry, foods))
        .sum()
}

/// Calories consumed on a day, rounded to whole kcal
#[must_use]
pub fn rounded_log_calories(log: &DailyLog, foods: &FoodDatabase) -> u32 {
    log_calories(log, foods).round().max(0.0) as u32
}
