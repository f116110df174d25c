// ABOUTME: Per-user repository turning raw stored strings into typed records
// ABOUTME: Malformed records are logged and replaced by the caller's default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{RecordKind, RecordStore, Storage};
use lockin_core::errors::AppResult;
use lockin_core::models::{DailyLog, FoodItem, Session, UserProfile, WeightUnit, WorkoutTemplate};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Typed load/save of a user's records over any [`RecordStore`]
#[derive(Debug, Clone)]
pub struct UserRepository<S = Storage> {
    store: S,
}

impl<S: RecordStore> UserRepository<S> {
    /// Wrap a store
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Load a record, or `default` when it is missing or cannot be parsed
    ///
    /// # Errors
    ///
    /// Returns an error only when the store itself fails
    pub async fn load<T: DeserializeOwned>(
        &self,
        user: &str,
        kind: RecordKind,
        default: T,
    ) -> AppResult<T> {
        let key = kind.key_for(user);
        let Some(raw) = self.store.get(&key).await? else {
            return Ok(default);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(error) => {
                warn!(key = %key, %error, "Malformed stored record, using default");
                Ok(default)
            }
        }
    }

    /// Replace a record
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails
    pub async fn save<T: Serialize + Sync>(
        &self,
        user: &str,
        kind: RecordKind,
        value: &T,
    ) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(&kind.key_for(user), raw).await
    }

    /// Delete a record; returns whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails
    pub async fn clear(&self, user: &str, kind: RecordKind) -> AppResult<bool> {
        self.store.remove(&kind.key_for(user)).await
    }

    /// All sessions
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn sessions(&self, user: &str) -> AppResult<Vec<Session>> {
        self.load(user, RecordKind::Sessions, Vec::new()).await
    }

    /// Replace all sessions
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails
    pub async fn save_sessions(&self, user: &str, sessions: &[Session]) -> AppResult<()> {
        self.save(user, RecordKind::Sessions, &sessions).await
    }

    /// Saved plan templates
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn templates(&self, user: &str) -> AppResult<Vec<WorkoutTemplate>> {
        self.load(user, RecordKind::Templates, Vec::new()).await
    }

    /// Replace the saved plan
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails
    pub async fn save_templates(&self, user: &str, templates: &[WorkoutTemplate]) -> AppResult<()> {
        self.save(user, RecordKind::Templates, &templates).await
    }

    /// Stored profile with nested records backfilled
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn profile(&self, user: &str) -> AppResult<UserProfile> {
        self.load(user, RecordKind::Profile, UserProfile::default())
            .await
    }

    /// Replace the profile
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails
    pub async fn save_profile(&self, user: &str, profile: &UserProfile) -> AppResult<()> {
        self.save(user, RecordKind::Profile, profile).await
    }

    /// All daily logs
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn daily_logs(&self, user: &str) -> AppResult<Vec<DailyLog>> {
        self.load(user, RecordKind::DailyLogs, Vec::new()).await
    }

    /// Replace all daily logs
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails
    pub async fn save_daily_logs(&self, user: &str, logs: &[DailyLog]) -> AppResult<()> {
        self.save(user, RecordKind::DailyLogs, &logs).await
    }

    /// User-created foods
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn custom_foods(&self, user: &str) -> AppResult<Vec<FoodItem>> {
        self.load(user, RecordKind::CustomFoods, Vec::new()).await
    }

    /// Replace the user's custom foods
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails
    pub async fn save_custom_foods(&self, user: &str, foods: &[FoodItem]) -> AppResult<()> {
        self.save(user, RecordKind::CustomFoods, &foods).await
    }

    /// Preferred weight unit
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn unit(&self, user: &str) -> AppResult<WeightUnit> {
        self.load(user, RecordKind::Unit, WeightUnit::default())
            .await
    }

    /// Set the preferred weight unit
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails
    pub async fn save_unit(&self, user: &str, unit: WeightUnit) -> AppResult<()> {
        self.save(user, RecordKind::Unit, &unit).await
    }
}
