// ABOUTME: Hour-of-day activity histogram and day, week and month period views
// ABOUTME: Folds logged sets, meals and steps into chart series without touching the records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Activity Aggregator
//!
//! Views are computed from scratch for every anchor date; navigating a period
//! only moves the anchor. Hours are taken in the caller's time zone.

use crate::nutrition::{logged_food_calories, meal_totals, rounded_log_calories};
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeZone, Timelike, Utc};
use lockin_core::catalog::FoodDatabase;
use lockin_core::models::{DailyLog, MealName, Session};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Hours in a day
pub const HOURS_PER_DAY: usize = 24;

/// Rows in the month calendar grid
pub const GRID_WEEKS: usize = 6;

/// Calendar cells, Sunday first; `None` outside the month
pub type MonthGrid = [[Option<NaiveDate>; 7]; GRID_WEEKS];

/// Quantity a period view charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityMetric {
    /// Calories consumed
    Calories,
    /// Steps walked
    Steps,
}

impl ActivityMetric {
    /// Parse `calories` or `steps`, ignoring case
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "calories" | "kcal" => Some(Self::Calories),
            "steps" => Some(Self::Steps),
            _ => None,
        }
    }

    /// Unit label
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Steps => "steps",
        }
    }
}

/// Period length of a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// One calendar day
    Day,
    /// Sunday-start week
    Week,
    /// Calendar month
    Month,
}

impl Period {
    /// Parse `day`, `week` or `month`, ignoring case
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }

    /// Move the anchor by `delta` periods.
    ///
    /// Month moves clamp the day to the target month's length (Jan 31 + 1 month
    /// is Feb 28 or 29). Moves past chrono's supported range leave the anchor.
    #[must_use]
    pub fn navigate(self, anchor: NaiveDate, delta: i32) -> NaiveDate {
        let steps = delta.unsigned_abs();
        let moved = match (self, delta.is_negative()) {
            (Self::Day, false) => anchor.checked_add_days(Days::new(u64::from(steps))),
            (Self::Day, true) => anchor.checked_sub_days(Days::new(u64::from(steps))),
            (Self::Week, false) => anchor.checked_add_days(Days::new(u64::from(steps) * 7)),
            (Self::Week, true) => anchor.checked_sub_days(Days::new(u64::from(steps) * 7)),
            (Self::Month, false) => anchor.checked_add_months(Months::new(steps)),
            (Self::Month, true) => anchor.checked_sub_months(Months::new(steps)),
        };
        moved.unwrap_or(anchor)
    }

    /// First and last date (inclusive) of the period containing `anchor`
    #[must_use]
    pub fn range(self, anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Self::Day => (anchor, anchor),
            Self::Week => {
                let start = week_start(anchor);
                (start, start + Days::new(6))
            }
            Self::Month => {
                let start = month_start(anchor);
                let end = start
                    .iter_days()
                    .take_while(|day| day.month() == start.month())
                    .last()
                    .unwrap_or(start);
                (start, end)
            }
        }
    }

    /// Heading for the period containing `anchor`
    #[must_use]
    pub fn title(self, anchor: NaiveDate) -> String {
        let (start, end) = self.range(anchor);
        match self {
            Self::Day => start.format("%A, %B %-d").to_string(),
            Self::Week if start.month() == end.month() => {
                format!("{}–{}", start.format("%-d"), end.format("%-d %B"))
            }
            Self::Week => format!("{}–{}", start.format("%-d %B"), end.format("%-d %B")),
            Self::Month => start.format("%B %Y").to_string(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        })
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

fn local_hour<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> usize {
    at.with_timezone(tz).hour() as usize
}

/// Count of completed sets and logged foods per local hour of day.
///
/// Buckets count events, not amounts.
#[must_use]
pub fn hourly_activity<Tz: TimeZone>(
    sessions: &[Session],
    logs: &[DailyLog],
    tz: &Tz,
) -> [u32; HOURS_PER_DAY] {
    let mut buckets = [0_u32; HOURS_PER_DAY];
    let set_times = sessions
        .iter()
        .flat_map(Session::sets)
        .filter_map(|set| set.completed_at.as_ref());
    let food_times = logs
        .iter()
        .flat_map(DailyLog::foods)
        .map(|entry| &entry.logged_at);
    for at in set_times.chain(food_times) {
        buckets[local_hour(at, tz)] += 1;
    }
    buckets
}

/// Calories and steps for one date of a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotals {
    /// Calendar date
    pub date: NaiveDate,
    /// Calories consumed, rounded to whole kcal
    pub calories: u32,
    /// Steps walked
    pub steps: u32,
}

impl DailyTotals {
    /// Value of `metric` for this day
    #[must_use]
    pub const fn value(&self, metric: ActivityMetric) -> u32 {
        match metric {
            ActivityMetric::Calories => self.calories,
            ActivityMetric::Steps => self.steps,
        }
    }
}

/// One meal slot of the day view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSummary {
    /// Meal slot
    pub name: MealName,
    /// Earliest `logged_at` among the meal's foods
    pub first_logged_at: DateTime<Utc>,
    /// Number of logged foods
    pub food_count: usize,
    /// Calorie subtotal, rounded
    pub calories: u32,
}

/// Labelled bar of the week view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPoint {
    /// Three-letter weekday abbreviation
    pub label: String,
    /// Calendar date
    pub date: NaiveDate,
    /// Metric value
    pub value: u32,
}

/// Day cell of the month view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthPoint {
    /// Calendar date
    pub date: NaiveDate,
    /// Metric value
    pub value: u32,
    /// `value / max`, in `0.0..=1.0`
    pub magnitude: f64,
}

/// Period-specific part of a view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "period", rename_all = "lowercase")]
pub enum PeriodDetail {
    /// Intra-day breakdown
    Day {
        /// Calories logged per local hour; all zero for steps
        hourly: [f64; HOURS_PER_DAY],
        /// Non-empty meals sorted by first logged time; empty for steps
        meals: Vec<MealSummary>,
    },
    /// Seven bars, Sunday first
    Week {
        /// One point per day
        points: Vec<WeekPoint>,
    },
    /// Calendar month
    Month {
        /// One point per day of the month
        points: Vec<MonthPoint>,
        /// Normalization maximum, never below 1
        max: u32,
        /// 6×7 calendar with blanks outside the month
        grid: MonthGrid,
    },
}

/// Chart data for one period of one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodView {
    /// Charted metric
    pub metric: ActivityMetric,
    /// First date of the period
    pub start: NaiveDate,
    /// Last date of the period
    pub end: NaiveDate,
    /// Heading (`Friday, October 16`, `11–17 October`, `October 2026`)
    pub title: String,
    /// Σ metric over the period
    pub total: u64,
    /// Per-date totals for every date in the range
    pub days: Vec<DailyTotals>,
    /// Period-specific breakdown
    pub detail: PeriodDetail,
}

fn index_logs(logs: &[DailyLog]) -> HashMap<NaiveDate, &DailyLog> {
    let mut by_date = HashMap::with_capacity(logs.len());
    for log in logs {
        by_date.entry(log.date).or_insert(log);
    }
    by_date
}

/// Per-date calories and steps over `start..=end`; dates without a log are zero
#[must_use]
pub fn daily_totals(
    logs: &[DailyLog],
    foods: &FoodDatabase,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DailyTotals> {
    let by_date = index_logs(logs);
    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| {
            by_date.get(&date).map_or(
                DailyTotals {
                    date,
                    calories: 0,
                    steps: 0,
                },
                |log| DailyTotals {
                    date,
                    calories: rounded_log_calories(log, foods),
                    steps: log.steps,
                },
            )
        })
        .collect()
}

/// Per-meal summaries of a log, non-empty meals only, earliest first
#[must_use]
pub fn meal_summaries(log: &DailyLog, foods: &FoodDatabase) -> Vec<MealSummary> {
    let mut summaries: Vec<MealSummary> = log
        .meals
        .iter()
        .filter_map(|meal| {
            let first_logged_at = meal.foods.iter().map(|entry| entry.logged_at).min()?;
            Some(MealSummary {
                name: meal.name,
                first_logged_at,
                food_count: meal.foods.len(),
                calories: meal_totals(meal, foods).calories.round().max(0.0) as u32,
            })
        })
        .collect();
    summaries.sort_by_key(|summary| summary.first_logged_at);
    summaries
}

/// Calories logged per local hour of the day
#[must_use]
pub fn hourly_calories<Tz: TimeZone>(
    log: &DailyLog,
    foods: &FoodDatabase,
    tz: &Tz,
) -> [f64; HOURS_PER_DAY] {
    let mut hourly = [0.0; HOURS_PER_DAY];
    for entry in log.foods() {
        hourly[local_hour(&entry.logged_at, tz)] += logged_food_calories(entry, foods);
    }
    hourly
}

/// 6×7 calendar for the month containing `anchor`
#[must_use]
pub fn month_grid(anchor: NaiveDate) -> MonthGrid {
    let (start, end) = Period::Month.range(anchor);
    let leading = start.weekday().num_days_from_sunday() as usize;
    let mut grid: MonthGrid = [[None; 7]; GRID_WEEKS];
    for (offset, date) in start
        .iter_days()
        .take_while(|date| *date <= end)
        .enumerate()
    {
        let cell = leading + offset;
        grid[cell / 7][cell % 7] = Some(date);
    }
    grid
}

/// Build the view of `period` around `anchor` for `metric`
#[must_use]
pub fn period_view<Tz: TimeZone>(
    logs: &[DailyLog],
    foods: &FoodDatabase,
    metric: ActivityMetric,
    period: Period,
    anchor: NaiveDate,
    tz: &Tz,
) -> PeriodView {
    let (start, end) = period.range(anchor);
    let days = daily_totals(logs, foods, start, end);
    let total = days.iter().map(|day| u64::from(day.value(metric))).sum();

    let detail = match period {
        Period::Day => {
            let log = index_logs(logs).get(&anchor).copied();
            match (metric, log) {
                (ActivityMetric::Calories, Some(log)) => PeriodDetail::Day {
                    hourly: hourly_calories(log, foods, tz),
                    meals: meal_summaries(log, foods),
                },
                _ => PeriodDetail::Day {
                    hourly: [0.0; HOURS_PER_DAY],
                    meals: Vec::new(),
                },
            }
        }
        Period::Week => PeriodDetail::Week {
            points: days
                .iter()
                .map(|day| WeekPoint {
                    label: day.date.format("%a").to_string(),
                    date: day.date,
                    value: day.value(metric),
                })
                .collect(),
        },
        Period::Month => {
            let max = days
                .iter()
                .map(|day| day.value(metric))
                .max()
                .unwrap_or(0)
                .max(1);
            PeriodDetail::Month {
                points: days
                    .iter()
                    .map(|day| MonthPoint {
                        date: day.date,
                        value: day.value(metric),
                        magnitude: f64::from(day.value(metric)) / f64::from(max),
                    })
                    .collect(),
                max,
                grid: month_grid(anchor),
            }
        }
    };

    PeriodView {
        metric,
        start,
        end,
        title: period.title(anchor),
        total,
        days,
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    #[test]
    fn week_range_starts_on_sunday() {
        // 2026-10-16 is a Friday
        let (start, end) = Period::Week.range(date(2026, 10, 16));
        assert_eq!(start, date(2026, 10, 11));
        assert_eq!(end, date(2026, 10, 17));
    }

    #[test]
    fn month_navigation_clamps_day() {
        assert_eq!(Period::Month.navigate(date(2026, 1, 31), 1), date(2026, 2, 28));
        assert_eq!(Period::Month.navigate(date(2026, 3, 31), -1), date(2026, 2, 28));
        assert_eq!(Period::Week.navigate(date(2026, 10, 16), -2), date(2026, 10, 2));
        assert_eq!(Period::Day.navigate(date(2026, 12, 31), 1), date(2027, 1, 1));
    }

    #[test]
    fn month_grid_places_first_day_on_its_weekday() {
        // 2026-02-01 is a Sunday, 2026-08-01 a Saturday
        let february = month_grid(date(2026, 2, 14));
        assert_eq!(february[0][0], Some(date(2026, 2, 1)));
        assert_eq!(february[3][6], Some(date(2026, 2, 28)));
        assert!(february[4].iter().all(Option::is_none));

        let august = month_grid(date(2026, 8, 1));
        assert!(august[0][..6].iter().all(Option::is_none));
        assert_eq!(august[0][6], Some(date(2026, 8, 1)));
        assert_eq!(august[5][1], Some(date(2026, 8, 31)));
    }

    #[test]
    fn titles_follow_period() {
        let anchor = date(2026, 10, 16);
        assert_eq!(Period::Day.title(anchor), "Friday, October 16");
        assert_eq!(Period::Week.title(anchor), "11–17 October");
        assert_eq!(Period::Month.title(anchor), "October 2026");
        assert_eq!(
            Period::Week.title(date(2026, 9, 30)),
            "27 September–3 October"
        );
    }
}
