// ABOUTME: Activity commands for lockin-cli
// ABOUTME: Goal ring, period charts and the hour-of-day histogram
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use lockin::intelligence::activity::{hourly_activity, period_view, ActivityMetric, Period, PeriodDetail};
use lockin::intelligence::goals::{weekly_goal_series, GoalStatus};
use lockin::services::nutrition::food_database;
use lockin::storage::UserRepository;

use crate::helpers::display::bar;
use crate::helpers::today;

/// Goal status for the last seven days
pub async fn goals(repo: &UserRepository, user: &str) -> Result<()> {
    let profile = repo.profile(user).await?;
    let logs = repo.daily_logs(user).await?;
    let foods = food_database(repo, user).await?;
    let series = weekly_goal_series(&logs, &foods, &profile.goals, today());

    println!(
        "Targets: {} kcal, {} steps",
        profile.goals.calorie_target, profile.goals.step_target
    );
    for day in &series.days {
        let status = match day.status {
            GoalStatus::Achieved => "achieved",
            GoalStatus::Partial => "partial",
            GoalStatus::None => "-",
        };
        let marker = if day.is_today { ">" } else { " " };
        println!(
            "{marker} {} {}  {:>6.0} kcal  {:>6} steps  {status}",
            day.day_initial, day.date, day.calories, day.steps
        );
    }
    println!("Achieved {} of {} days", series.achieved_count, series.days.len());
    Ok(())
}

/// Chart one metric over a period
pub async fn view(
    repo: &UserRepository,
    user: &str,
    metric: &str,
    period: &str,
    date: Option<NaiveDate>,
    offset: i32,
    json: bool,
) -> Result<()> {
    let metric = ActivityMetric::parse(metric).ok_or_else(|| anyhow!("Unknown metric '{metric}'"))?;
    let period = Period::parse(period).ok_or_else(|| anyhow!("Unknown period '{period}'"))?;
    let anchor = period.navigate(date.unwrap_or_else(today), offset);

    let logs = repo.daily_logs(user).await?;
    let foods = food_database(repo, user).await?;
    let view = period_view(&logs, &foods, metric, period, anchor, &Local);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{} ({} {})", view.title, view.total, metric.unit());
    match &view.detail {
        PeriodDetail::Day { hourly, meals } => {
            let max = hourly.iter().copied().fold(0.0_f64, f64::max);
            for (hour, value) in hourly.iter().enumerate() {
                if *value > 0.0 {
                    println!("  {hour:02}:00 {:>7.0} {}", value, bar(*value, max));
                }
            }
            for meal in meals {
                println!(
                    "  {} at {}: {} foods, {} kcal",
                    meal.name,
                    meal.first_logged_at.with_timezone(&Local).format("%H:%M"),
                    meal.food_count,
                    meal.calories
                );
            }
        }
        PeriodDetail::Week { points } => {
            let max = points.iter().map(|point| point.value).max().unwrap_or(0);
            for point in points {
                println!(
                    "  {} {:>7} {}",
                    point.label,
                    point.value,
                    bar(f64::from(point.value), f64::from(max))
                );
            }
        }
        PeriodDetail::Month { points, max, .. } => {
            for point in points {
                println!(
                    "  {} {:>7} {}",
                    point.date,
                    point.value,
                    bar(f64::from(point.value), f64::from(*max))
                );
            }
        }
    }
    Ok(())
}

/// Completed sets and logged foods per local hour
pub async fn hourly(repo: &UserRepository, user: &str) -> Result<()> {
    let sessions = repo.sessions(user).await?;
    let logs = repo.daily_logs(user).await?;
    let buckets = hourly_activity(&sessions, &logs, &Local);
    let max = buckets.iter().copied().max().unwrap_or(0);
    for (hour, count) in buckets.iter().enumerate() {
        println!(
            "{hour:02}:00 {count:>4} {}",
            bar(f64::from(*count), f64::from(max))
        );
    }
    Ok(())
}
