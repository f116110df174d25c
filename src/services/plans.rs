// ABOUTME: Persisting the weekly workout plan
// ABOUTME: Plans are finalized before saving so rest and empty days never reach storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::storage::{RecordKind, RecordStore, UserRepository};
use lockin_core::errors::AppResult;
use lockin_core::models::WorkoutTemplate;
use lockin_intelligence::plan::finalize_plan;
use tracing::info;

/// Finalize and store `plan`, replacing any saved plan; returns what was stored
///
/// # Errors
///
/// Returns an error if the templates record cannot be written
pub async fn save_plan<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    plan: Vec<WorkoutTemplate>,
) -> AppResult<Vec<WorkoutTemplate>> {
    let finalized = finalize_plan(plan);
    repo.save_templates(user, &finalized).await?;
    info!(user, training_days = finalized.len(), "Workout plan saved");
    Ok(finalized)
}

/// Delete the saved plan; returns whether one existed
///
/// # Errors
///
/// Returns an error if the store fails
pub async fn reset_plan<S: RecordStore>(repo: &UserRepository<S>, user: &str) -> AppResult<bool> {
    let existed = repo.clear(user, RecordKind::Templates).await?;
    info!(user, existed, "Workout plan reset");
    Ok(existed)
}
