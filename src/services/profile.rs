// ABOUTME: Profile persistence with derived fields refreshed on every save
// ABOUTME: Age follows the date of birth and onboarding is marked complete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::storage::{RecordStore, UserRepository};
use chrono::{DateTime, Utc};
use lockin_core::errors::AppResult;
use lockin_core::models::UserProfile;
use lockin_intelligence::training::age_on;

/// Stored profile, or the default one; nested records are always present
///
/// # Errors
///
/// Returns an error if the store fails
pub async fn load_profile<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
) -> AppResult<UserProfile> {
    repo.profile(user).await
}

/// Save `profile` with its age recomputed, onboarding completed and `last_updated` stamped
///
/// # Errors
///
/// Returns an error if the profile record cannot be written
pub async fn save_profile<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    mut profile: UserProfile,
    now: DateTime<Utc>,
) -> AppResult<UserProfile> {
    if let Some(dob) = profile.dob {
        profile.age = age_on(dob, now.date_naive());
    }
    profile.onboarding_completed = true;
    profile.last_updated = Some(now);
    repo.save_profile(user, &profile).await?;
    Ok(profile)
}
