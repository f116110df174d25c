// ABOUTME: Nutrition tracking models for daily food and step logging
// ABOUTME: DailyLog, Meal, MealName, LoggedFood and FoodItem definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

/// Fixed meal slot of a daily log
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MealName {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Snacks between meals
    Snacks,
}

impl MealName {
    /// Slots in display order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    /// Display name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snacks => "Snacks",
        }
    }

    /// Parse meal slot from string, ignoring case
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "snack" | "snacks" => Some(Self::Snacks),
            _ => None,
        }
    }
}

impl fmt::Display for MealName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Food with macro values per serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Food id (`food_1` for catalog entries, `custom-…` for user foods)
    pub id: String,
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
    /// Serving description (`100g`, `1 cup`)
    pub serving_size: String,
    /// Created by the user rather than shipped in the catalog
    #[serde(default)]
    pub is_custom: bool,
}

/// One food logged into a meal slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedFood {
    /// Entry id
    pub id: String,
    /// Referenced food id; may point at a food that no longer exists
    pub food_id: String,
    /// Servings eaten
    pub servings: f64,
    /// When the entry was logged
    pub logged_at: DateTime<Utc>,
}

/// A meal slot and its logged foods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Slot name
    pub name: MealName,
    /// Logged foods in insertion order
    pub foods: Vec<LoggedFood>,
}

/// Meals, steps and water for one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    /// Calendar date
    pub date: NaiveDate,
    /// Meal slots
    #[serde(default)]
    pub meals: Vec<Meal>,
    /// Water intake (ml)
    #[serde(default)]
    pub water_intake: f64,
    /// Steps walked
    #[serde(default)]
    pub steps: u32,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DailyLog {
    /// Fresh log for `date`: four empty meal slots, no steps, no water
    #[must_use]
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            meals: MealName::ALL
                .into_iter()
                .map(|name| Meal {
                    name,
                    foods: Vec::new(),
                })
                .collect(),
            water_intake: 0.0,
            steps: 0,
            notes: None,
        }
    }

    /// Meal slot by name
    #[must_use]
    pub fn meal(&self, name: MealName) -> Option<&Meal> {
        self.meals.iter().find(|meal| meal.name == name)
    }

    /// Meal slot by name, inserting it when a legacy log lacks the slot
    pub fn meal_mut(&mut self, name: MealName) -> &mut Meal {
        let position = self.meals.iter().position(|meal| meal.name == name);
        let index = position.unwrap_or_else(|| {
            self.meals.push(Meal {
                name,
                foods: Vec::new(),
            });
            self.meals.len() - 1
        });
        &mut self.meals[index]
    }

    /// Every logged food across all slots
    pub fn foods(&self) -> impl Iterator<Item = &LoggedFood> {
        self.meals.iter().flat_map(|meal| meal.foods.iter())
    }
}

/// Calories and macros summed over a set of logged foods
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

impl MacroTotals {
    /// Macros of `servings` servings of `food`
    #[must_use]
    pub fn of(food: &FoodItem, servings: f64) -> Self {
        Self {
            calories: food.calories * servings,
            protein: food.protein * servings,
            carbs: food.carbs * servings,
            fat: food.fat * servings,
        }
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein += rhs.protein;
        self.carbs += rhs.carbs;
        self.fat += rhs.fat;
    }
}
