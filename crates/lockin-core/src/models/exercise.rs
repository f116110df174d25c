// ABOUTME: Exercise model shared by the catalog and session snapshots
// ABOUTME: Identifies a movement by catalog id, display name and muscle group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A catalog exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Catalog id (e.g. `chest_4`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Muscle group the catalog files it under
    pub muscle_group: String,
}
