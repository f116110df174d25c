// ABOUTME: Plan commands for lockin-cli
// ABOUTME: Lists splits, generates and saves plans, shows the weekly schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Result};
use lockin::intelligence::plan::{generate_plan, list_available_splits};
use lockin::intelligence::training::weekly_schedule;
use lockin::services::plans::{reset_plan, save_plan};
use lockin::storage::UserRepository;

use crate::helpers::display::{display_plan, display_schedule};
use crate::helpers::today;

/// List splits supporting `days` training days
pub fn splits(days: u8) {
    let available = list_available_splits(days);
    if available.is_empty() {
        println!("No split supports {days} training days");
        return;
    }
    for split in available {
        println!("{:<6} {:<24} {}", split.key, split.name, split.description);
    }
}

/// Generate a plan, optionally replacing the saved one
pub async fn generate(
    repo: &UserRepository,
    user: &str,
    days: u8,
    split: &str,
    save: bool,
) -> Result<()> {
    let Some(plan) = generate_plan(days, split) else {
        bail!("Split '{split}' does not support {days} training days");
    };
    display_plan(&plan);
    if save {
        let saved = save_plan(repo, user, plan).await?;
        println!("\nSaved {} training days", saved.len());
    }
    Ok(())
}

/// Show the saved plan and this week's progress
pub async fn show(repo: &UserRepository, user: &str) -> Result<()> {
    let templates = repo.templates(user).await?;
    if templates.is_empty() {
        println!("No saved plan. Generate one with `lockin-cli plan generate --save`.");
        return Ok(());
    }
    let sessions = repo.sessions(user).await?;
    display_plan(&templates);
    println!();
    display_schedule(&weekly_schedule(&templates, &sessions, today()));
    Ok(())
}

/// Delete the saved plan
pub async fn reset(repo: &UserRepository, user: &str) -> Result<()> {
    if reset_plan(repo, user).await? {
        println!("Plan deleted");
    } else {
        println!("No saved plan");
    }
    Ok(())
}
