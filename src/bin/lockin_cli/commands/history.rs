// ABOUTME: History commands for lockin-cli
// ABOUTME: CSV export and the streak, volume and energy summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use lockin::export::export_history;
use lockin::intelligence::training::{calculate_tdee, total_volume_lifted, workout_streak};
use lockin::storage::UserRepository;
use std::path::Path;
use tracing::info;

use crate::helpers::today;

/// Write completed workouts as CSV to `output` or stdout
pub async fn export(repo: &UserRepository, user: &str, output: Option<&Path>) -> Result<()> {
    let csv = export_history(repo, user).await?;
    match output {
        Some(path) => {
            tokio::fs::write(path, csv).await?;
            info!(path = %path.display(), "History written");
            println!("Exported to {}", path.display());
        }
        None => print!("{csv}"),
    }
    Ok(())
}

/// Print workout totals and the energy estimate
pub async fn stats(repo: &UserRepository, user: &str) -> Result<()> {
    let sessions = repo.sessions(user).await?;
    let profile = repo.profile(user).await?;
    let unit = repo.unit(user).await?;
    let today = today();

    let completed = sessions.iter().filter(|session| session.is_completed()).count();
    println!("Workouts completed: {completed}");
    println!("Current streak:     {} days", workout_streak(&sessions, today));
    println!(
        "Total volume:       {} {unit}",
        total_volume_lifted(&sessions)
    );
    println!("Estimated TDEE:     {} kcal", calculate_tdee(&profile, today));
    Ok(())
}
