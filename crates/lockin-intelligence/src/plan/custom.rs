// ABOUTME: Hand-built weekly plans, exercise swaps and plan finalization before saving
// ABOUTME: A custom plan starts as seven rest days that the user fills in one by one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::presets::MiniPreset;
use lockin_core::constants::plans::{DEFAULT_REPS, DEFAULT_SETS, REST_DAY_TITLE};
use lockin_core::models::{DayOfWeek, TemplateExercise, WorkoutTemplate};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while editing a plan
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// A training day needs a title
    #[error("Please provide a title for the workout")]
    BlankTitle,

    /// No template with this id in the plan
    #[error("Template not found: {0}")]
    UnknownTemplate(String),
}

/// Editable seven-day plan, Sunday first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomPlanBuilder {
    days: Vec<WorkoutTemplate>,
}

impl Default for CustomPlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn rest_day(day_of_week: DayOfWeek) -> WorkoutTemplate {
    WorkoutTemplate {
        id: format!("template-custom-{day_of_week}"),
        day_of_week,
        title: REST_DAY_TITLE.to_owned(),
        exercises: Vec::new(),
    }
}

impl CustomPlanBuilder {
    /// One rest day per weekday
    #[must_use]
    pub fn new() -> Self {
        Self {
            days: DayOfWeek::ALL.into_iter().map(rest_day).collect(),
        }
    }

    /// All seven days, Sunday first
    #[must_use]
    pub fn days(&self) -> &[WorkoutTemplate] {
        &self.days
    }

    /// The template for `day`
    #[must_use]
    pub fn day(&self, day: DayOfWeek) -> &WorkoutTemplate {
        &self.days[day.index()]
    }

    fn day_mut(&mut self, day: DayOfWeek) -> &mut WorkoutTemplate {
        &mut self.days[day.index()]
    }

    /// Replace the template for its weekday.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::BlankTitle`] when the title is empty or whitespace.
    pub fn set_day(&mut self, template: WorkoutTemplate) -> Result<(), PlanError> {
        if template.title.trim().is_empty() {
            return Err(PlanError::BlankTitle);
        }
        let day = template.day_of_week;
        *self.day_mut(day) = template;
        Ok(())
    }

    /// Rename a day.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::BlankTitle`] when the title is empty or whitespace.
    pub fn set_title(&mut self, day: DayOfWeek, title: &str) -> Result<(), PlanError> {
        if title.trim().is_empty() {
            return Err(PlanError::BlankTitle);
        }
        title.clone_into(&mut self.day_mut(day).title);
        Ok(())
    }

    /// Mark a day as rest, clearing its exercises
    pub fn set_rest_day(&mut self, day: DayOfWeek) {
        let template = self.day_mut(day);
        REST_DAY_TITLE.clone_into(&mut template.title);
        template.exercises.clear();
    }

    /// Load a preset's exercises into a day.
    ///
    /// A day still titled as rest (or untitled) is renamed after the preset;
    /// any other title is kept.
    pub fn apply_preset(&mut self, day: DayOfWeek, preset: MiniPreset) {
        let template = self.day_mut(day);
        if template.title.trim().is_empty() || template.title == REST_DAY_TITLE {
            template.title = preset.day_title();
        }
        template.exercises = preset.exercises();
    }

    /// Append an exercise with default targets; returns `false` when already present
    pub fn add_exercise(&mut self, day: DayOfWeek, exercise_id: &str) -> bool {
        let template = self.day_mut(day);
        if template
            .exercises
            .iter()
            .any(|ex| ex.exercise_id == exercise_id)
        {
            return false;
        }
        template
            .exercises
            .push(TemplateExercise::new(exercise_id, DEFAULT_SETS, DEFAULT_REPS));
        true
    }

    /// Drop an exercise from a day; returns whether anything was removed
    pub fn remove_exercise(&mut self, day: DayOfWeek, exercise_id: &str) -> bool {
        let template = self.day_mut(day);
        let before = template.exercises.len();
        template.exercises.retain(|ex| ex.exercise_id != exercise_id);
        template.exercises.len() != before
    }

    /// The plan with rest and empty days removed
    #[must_use]
    pub fn finalize(self) -> Vec<WorkoutTemplate> {
        finalize_plan(self.days)
    }
}

/// Replace `from` with `to` in the template `template_id`, keeping its sets and reps.
///
/// # Errors
///
/// Returns [`PlanError::UnknownTemplate`] when no template has that id.
pub fn swap_exercise(
    plan: &mut [WorkoutTemplate],
    template_id: &str,
    from: &str,
    to: &str,
) -> Result<(), PlanError> {
    let template = plan
        .iter_mut()
        .find(|template| template.id == template_id)
        .ok_or_else(|| PlanError::UnknownTemplate(template_id.to_owned()))?;
    for exercise in &mut template.exercises {
        if exercise.exercise_id == from {
            to.clone_into(&mut exercise.exercise_id);
        }
    }
    Ok(())
}

/// Keep only training days: drops days titled "Rest Day", days without
/// exercises, and any later template for a weekday already taken.
#[must_use]
pub fn finalize_plan(plan: Vec<WorkoutTemplate>) -> Vec<WorkoutTemplate> {
    let mut seen = HashSet::new();
    plan.into_iter()
        .filter(|template| template.title != REST_DAY_TITLE && !template.exercises.is_empty())
        .filter(|template| seen.insert(template.day_of_week))
        .collect()
}
