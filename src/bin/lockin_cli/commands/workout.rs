// ABOUTME: Workout session commands for lockin-cli
// ABOUTME: Starts sessions from the plan, logs sets, adds exercises and finishes sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, bail, Result};
use chrono::{NaiveDate, Utc};
use lockin::core::catalog::search_exercises;
use lockin::core::models::{DayOfWeek, SetUpdate};
use lockin::intelligence::training::next_workout_template;
use lockin::services::sessions::{
    add_exercises as add_session_exercises, find_session, finish_workout, save_and_exit,
    start_workout, update_set,
};
use lockin::storage::UserRepository;
use tracing::info;

use crate::helpers::display::display_session;
use crate::helpers::today;

/// Start a session from the template for `day`, or the next one in rotation
pub async fn start(
    repo: &UserRepository,
    user: &str,
    day: Option<&str>,
    date: Option<NaiveDate>,
) -> Result<()> {
    let templates = repo.templates(user).await?;
    let template = match day {
        Some(day) => {
            let day = DayOfWeek::parse(day).ok_or_else(|| anyhow!("Unknown weekday '{day}'"))?;
            templates
                .iter()
                .find(|template| template.day_of_week == day)
                .ok_or_else(|| anyhow!("No workout planned on {day}"))?
        }
        None => {
            let sessions = repo.sessions(user).await?;
            next_workout_template(&templates, &sessions)
                .ok_or_else(|| anyhow!("No saved plan to start a workout from"))?
        }
    };
    let session = start_workout(repo, user, template, date.unwrap_or_else(today)).await?;
    display_session(&session);
    Ok(())
}

/// Record reps and weight for the `set`-th set (1-based) of an exercise
pub async fn log_set(
    repo: &UserRepository,
    user: &str,
    session_id: &str,
    exercise_id: &str,
    set: usize,
    reps: Option<u32>,
    weight: Option<f64>,
) -> Result<()> {
    if reps.is_none() && weight.is_none() {
        bail!("Nothing to record: pass --reps and/or --weight");
    }
    let session = find_session(repo, user, session_id).await?;
    let sets = &session
        .exercises
        .iter()
        .find(|exercise| exercise.id == exercise_id)
        .ok_or_else(|| anyhow!("Exercise {exercise_id} is not in session {session_id}"))?
        .sets;
    let set_id = set
        .checked_sub(1)
        .and_then(|index| sets.get(index))
        .map(|entry| entry.id.clone())
        .ok_or_else(|| anyhow!("Set {set} does not exist for {exercise_id}"))?;

    let session = update_set(
        repo,
        user,
        session_id,
        exercise_id,
        &set_id,
        SetUpdate { reps, weight },
        Utc::now(),
    )
    .await?;
    display_session(&session);
    Ok(())
}

/// Add catalog exercises to a session
pub async fn add_exercises(
    repo: &UserRepository,
    user: &str,
    session_id: &str,
    exercise_ids: &[String],
) -> Result<()> {
    let session = add_session_exercises(repo, user, session_id, exercise_ids).await?;
    display_session(&session);
    Ok(())
}

/// Print catalog exercises matching `term`
pub fn exercises(term: &str) {
    for (group, entries) in search_exercises(term) {
        println!("{group}");
        for entry in entries {
            println!("  {:<12} {}", entry.id, entry.name);
        }
    }
}

/// Save progress without finishing
pub async fn save(repo: &UserRepository, user: &str, session_id: &str) -> Result<()> {
    let session = save_and_exit(repo, user, session_id).await?;
    println!(
        "Saved session {} ({} {})",
        session.id, session.total_volume, session.unit
    );
    Ok(())
}

/// Complete a session
pub async fn finish(repo: &UserRepository, user: &str, session_id: &str) -> Result<()> {
    let session = finish_workout(repo, user, session_id, Utc::now()).await?;
    info!(session_id = %session.id, "Session completed from CLI");
    println!(
        "Workout complete: {} {} lifted",
        session.total_volume, session.unit
    );
    Ok(())
}
