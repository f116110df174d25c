// ABOUTME: Built-in food catalog and the combined built-in plus custom food database
// ABOUTME: Lookups by id tolerate dangling references by returning None
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::FoodItem;
use std::collections::HashMap;

fn food(id: &str, name: &str, macros: [f64; 4], serving_size: &str) -> FoodItem {
    let [calories, protein, carbs, fat] = macros;
    FoodItem {
        id: id.to_owned(),
        name: name.to_owned(),
        calories,
        protein,
        carbs,
        fat,
        serving_size: serving_size.to_owned(),
        is_custom: false,
    }
}

/// Foods shipped with the tracker
#[must_use]
pub fn builtin_foods() -> Vec<FoodItem> {
    vec![
        food("food_1", "Chicken Breast", [165.0, 31.0, 0.0, 3.6], "100g"),
        food("food_2", "Brown Rice", [111.0, 2.6, 23.0, 0.9], "100g cooked"),
        food("food_3", "Broccoli", [55.0, 3.7, 11.0, 0.6], "1 cup"),
        food("food_4", "Olive Oil", [119.0, 0.0, 0.0, 13.5], "1 tbsp"),
        food("food_5", "Whey Protein", [120.0, 24.0, 3.0, 1.0], "1 scoop"),
        food("food_6", "Egg", [78.0, 6.0, 0.6, 5.0], "1 large"),
        food("food_7", "Oats", [154.0, 5.0, 27.0, 2.6], "1/2 cup dry"),
        food("food_8", "Almonds", [164.0, 6.0, 6.0, 14.0], "1 oz (23 almonds)"),
        food("food_9", "Greek Yogurt", [100.0, 17.0, 6.0, 0.7], "170g (6 oz)"),
        food("food_10", "Salmon", [206.0, 22.0, 0.0, 12.0], "100g"),
    ]
}

/// Built-in catalog followed by the user's custom foods.
///
/// When a custom food reuses a built-in id the first (built-in) entry wins.
#[derive(Debug, Clone)]
pub struct FoodDatabase {
    foods: Vec<FoodItem>,
    index: HashMap<String, usize>,
}

impl FoodDatabase {
    /// Combine the built-in catalog with `custom` foods
    #[must_use]
    pub fn new(custom: Vec<FoodItem>) -> Self {
        let mut foods = builtin_foods();
        foods.extend(custom);
        let mut index = HashMap::with_capacity(foods.len());
        for (position, item) in foods.iter().enumerate() {
            index.entry(item.id.clone()).or_insert(position);
        }
        Self { foods, index }
    }

    /// Built-in foods only
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Vec::new())
    }

    /// Food by id
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&FoodItem> {
        self.index.get(id).map(|&position| &self.foods[position])
    }

    /// Every food, built-in first
    #[must_use]
    pub fn all(&self) -> &[FoodItem] {
        &self.foods
    }

    /// Foods whose name contains `term` (case-insensitive)
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&FoodItem> {
        let needle = term.trim().to_lowercase();
        self.foods
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect()
    }
}

impl Default for FoodDatabase {
    fn default() -> Self {
        Self::builtin()
    }
}
