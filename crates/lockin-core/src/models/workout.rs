// ABOUTME: Workout plan templates and performed sessions with their sets
// ABOUTME: Session status transitions and set volume bookkeeping live here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::exercises::find_exercise;
use crate::constants::sessions::{UNKNOWN_EXERCISE_NAME, UNKNOWN_MUSCLE_GROUP};
use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Day of the week, Sunday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    /// Sunday
    Sunday,
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
}

impl DayOfWeek {
    /// All days in calendar-week order starting on Sunday
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Full English name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Three-letter abbreviation (`Sun`, `Mon`, ...)
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        &self.as_str()[..3]
    }

    /// Position within a Sunday-start week (Sunday = 0)
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a full or three-letter day name, ignoring case
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|day| {
            let name = day.as_str().to_lowercase();
            name == lower || name[..3] == lower
        })
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight unit used for logged sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    Kg,
    /// Pounds
    Lbs,
}

impl WeightUnit {
    /// Lowercase unit label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lbs => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Planned exercise inside a template: targets, not performed sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateExercise {
    /// Catalog exercise id
    pub exercise_id: String,
    /// Number of sets to prefill when a session starts
    pub default_sets: u32,
    /// Target rep range, free text (`8-12`, `Failure`, `Hold`)
    pub default_reps: String,
}

impl TemplateExercise {
    /// Build a template entry
    pub fn new(
        exercise_id: impl Into<String>,
        default_sets: u32,
        default_reps: impl Into<String>,
    ) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            default_sets,
            default_reps: default_reps.into(),
        }
    }
}

/// One weekday of a training plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutTemplate {
    /// Template id
    pub id: String,
    /// Weekday this workout is planned for
    pub day_of_week: DayOfWeek,
    /// Workout title (e.g. `Push`)
    pub title: String,
    /// Ordered planned exercises
    pub exercises: Vec<TemplateExercise>,
}

/// One performed set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetEntry {
    /// Set id
    pub id: String,
    /// Repetitions performed
    pub reps: u32,
    /// Load lifted
    pub weight: f64,
    /// `reps × weight`
    pub volume: f64,
    /// First moment the set had both reps and weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Partial update applied to a set
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SetUpdate {
    /// New rep count
    pub reps: Option<u32>,
    /// New weight
    pub weight: Option<f64>,
}

impl SetEntry {
    /// A blank set with a fresh id
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: format!("set-{}", Uuid::new_v4()),
            reps: 0,
            weight: 0.0,
            volume: 0.0,
            completed_at: None,
        }
    }

    /// Whether the set carries a completion timestamp
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Apply an edit, recompute volume and stamp the first completion
    pub fn apply(&mut self, update: SetUpdate, now: DateTime<Utc>) {
        if let Some(reps) = update.reps {
            self.reps = reps;
        }
        if let Some(weight) = update.weight {
            self.weight = weight;
        }
        self.volume = f64::from(self.reps) * self.weight;
        if self.reps > 0 && self.weight > 0.0 && self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
    }
}

/// Exercise as performed in a session, with a snapshot of its catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExercise {
    /// Catalog exercise id
    pub id: String,
    /// Name at the time the session started
    pub name: String,
    /// Muscle group at the time the session started
    pub muscle_group: String,
    /// Performed sets, in order
    pub sets: Vec<SetEntry>,
}

impl SessionExercise {
    /// Snapshot a catalog exercise with `set_count` blank sets
    #[must_use]
    pub fn snapshot(exercise_id: &str, set_count: u32) -> Self {
        let (name, muscle_group) = find_exercise(exercise_id).map_or_else(
            || {
                (
                    UNKNOWN_EXERCISE_NAME.to_owned(),
                    UNKNOWN_MUSCLE_GROUP.to_owned(),
                )
            },
            |exercise| (exercise.name, exercise.muscle_group),
        );
        Self {
            id: exercise_id.to_owned(),
            name,
            muscle_group,
            sets: (0..set_count).map(|_| SetEntry::empty()).collect(),
        }
    }

    /// Σ set volume
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.sets.iter().map(|set| set.volume).sum()
    }
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    /// Started and still editable
    #[default]
    InProgress,
    /// Finished by the user
    Completed,
}

/// One concrete workout performed on a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Session id
    pub id: String,
    /// Calendar day the workout belongs to
    pub date: NaiveDate,
    /// Template the session was started from
    pub template_id: String,
    /// Performed exercises
    pub exercises: Vec<SessionExercise>,
    /// Lifecycle state
    pub status: SessionStatus,
    /// Σ volume, refreshed on save and frozen on finish
    pub total_volume: f64,
    /// Weight unit of every set in this session
    pub unit: WeightUnit,
    /// When the session was finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Start a session from a template, prefilling blank sets
    #[must_use]
    pub fn start(template: &WorkoutTemplate, date: NaiveDate, unit: WeightUnit) -> Self {
        Self {
            id: format!("session-{}", Uuid::new_v4()),
            date,
            template_id: template.id.clone(),
            exercises: template
                .exercises
                .iter()
                .map(|planned| SessionExercise::snapshot(&planned.exercise_id, planned.default_sets))
                .collect(),
            status: SessionStatus::InProgress,
            total_volume: 0.0,
            unit,
            completed_at: None,
        }
    }

    /// Whether the session has been finished
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    /// Σ volume over every set, independent of the stored total
    #[must_use]
    pub fn computed_volume(&self) -> f64 {
        self.exercises.iter().map(SessionExercise::volume).sum()
    }

    /// Store the current computed volume without changing status
    pub fn refresh_volume(&mut self) {
        self.total_volume = self.computed_volume();
    }

    /// Mark the session completed and freeze its volume.
    ///
    /// Finishing an already completed session keeps the original completion time.
    pub fn finish(&mut self, now: DateTime<Utc>) {
        self.refresh_volume();
        self.status = SessionStatus::Completed;
        if self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
    }

    /// Look up a performed exercise by catalog id
    pub fn exercise_mut(&mut self, exercise_id: &str) -> Option<&mut SessionExercise> {
        self.exercises.iter_mut().find(|ex| ex.id == exercise_id)
    }

    /// Iterate every set of every exercise
    pub fn sets(&self) -> impl Iterator<Item = &SetEntry> {
        self.exercises.iter().flat_map(|ex| ex.sets.iter())
    }
}
