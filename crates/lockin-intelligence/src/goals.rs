// ABOUTME: Rolling seven-day calorie and step goal achievement
// ABOUTME: Classifies each day as achieved, partial or none against the user's targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::nutrition::log_calories;
use chrono::{Days, NaiveDate};
use lockin_core::catalog::FoodDatabase;
use lockin_core::constants::goals::GOAL_SERIES_DAYS;
use lockin_core::models::{DailyLog, UserGoals};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How many of the two daily goals were met
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// Calories and steps both met
    Achieved,
    /// Exactly one of the two met
    Partial,
    /// Neither met, or nothing logged
    None,
}

/// Goal outcome for one day of the series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayGoal {
    /// Calendar date
    pub date: NaiveDate,
    /// First letter of the weekday (`S`, `M`, ...)
    pub day_initial: char,
    /// Calories consumed
    pub calories: f64,
    /// Steps logged
    pub steps: u32,
    /// Outcome
    pub status: GoalStatus,
    /// Whether this is the last day of the series
    pub is_today: bool,
}

/// Seven consecutive days, oldest first, ending today
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSeries {
    /// One record per day
    pub days: Vec<DayGoal>,
    /// Days with status `Achieved`
    pub achieved_count: usize,
}

/// Classify a day from what was consumed and walked
#[must_use]
pub fn goal_status(calories: f64, steps: u32, goals: &UserGoals) -> GoalStatus {
    let calories_met = calories >= f64::from(goals.calorie_target);
    let steps_met = steps >= goals.step_target;
    match (calories_met, steps_met) {
        (true, true) => GoalStatus::Achieved,
        (true, false) | (false, true) => GoalStatus::Partial,
        (false, false) => GoalStatus::None,
    }
}

/// Goal achievement for the seven days ending at `today`
#[must_use]
pub fn weekly_goal_series(
    logs: &[DailyLog],
    foods: &FoodDatabase,
    goals: &UserGoals,
    today: NaiveDate,
) -> GoalSeries {
    let mut by_date: HashMap<NaiveDate, &DailyLog> = HashMap::with_capacity(logs.len());
    for log in logs {
        by_date.entry(log.date).or_insert(log);
    }

    let days: Vec<DayGoal> = (0..GOAL_SERIES_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset as u64)))
        .map(|date| {
            let (calories, steps, status) = by_date.get(&date).map_or(
                (0.0, 0, GoalStatus::None),
                |log| {
                    let calories = log_calories(log, foods);
                    (calories, log.steps, goal_status(calories, log.steps, goals))
                },
            );
            DayGoal {
                date,
                day_initial: date.format("%a").to_string().chars().next().unwrap_or(' '),
                calories,
                steps,
                status,
                is_today: date == today,
            }
        })
        .collect();

    let achieved_count = days
        .iter()
        .filter(|day| day.status == GoalStatus::Achieved)
        .count();

    GoalSeries {
        days,
        achieved_count,
    }
}
