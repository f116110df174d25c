// ABOUTME: Training statistics derived from sessions, the saved plan and the profile
// ABOUTME: Volume, workout streak, plan rotation, weekly schedule and TDEE estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Days, NaiveDate};
use lockin_core::constants::energy::{
    ACTIVE_MULTIPLIER, BMR_AGE_FACTOR, BMR_FEMALE_OFFSET, BMR_HEIGHT_FACTOR, BMR_MALE_OFFSET,
    BMR_WEIGHT_FACTOR, MODERATE_MULTIPLIER, SEDENTARY_MULTIPLIER, TDEE_ROUNDING,
};
use lockin_core::constants::goals::DEFAULT_TDEE;
use lockin_core::models::{
    ActivityLevel, DayOfWeek, ExerciseFrequency, Session, SessionStatus, Sex, UserProfile,
    WorkoutTemplate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Σ set volume of a session, recomputed from its sets
#[must_use]
pub fn session_volume(session: &Session) -> f64 {
    session.computed_volume()
}

/// Σ stored volume over completed sessions
#[must_use]
pub fn total_volume_lifted(sessions: &[Session]) -> f64 {
    sessions
        .iter()
        .filter(|session| session.is_completed())
        .map(|session| session.total_volume)
        .sum()
}

/// Sessions that count as finished workouts
fn finished(sessions: &[Session]) -> impl Iterator<Item = &Session> {
    sessions
        .iter()
        .filter(|session| session.is_completed() && session.completed_at.is_some())
}

/// Consecutive training days ending at the most recent finished workout.
///
/// The streak is broken (0) when that workout is older than yesterday.
#[must_use]
pub fn workout_streak(sessions: &[Session], today: NaiveDate) -> u32 {
    let dates: BTreeSet<NaiveDate> = finished(sessions).map(|session| session.date).collect();
    let Some(&latest) = dates.last() else {
        return 0;
    };
    let yesterday = today.pred_opt().unwrap_or(today);
    if latest != today && latest != yesterday {
        return 0;
    }

    let mut streak = 1;
    let mut expected = latest.pred_opt();
    for &date in dates.iter().rev().skip(1) {
        if Some(date) != expected {
            break;
        }
        streak += 1;
        expected = date.pred_opt();
    }
    streak
}

/// Template to train next: the one after the last finished workout's template.
///
/// Falls back to the first template when nothing was finished yet or the
/// last template is no longer in the plan.
#[must_use]
pub fn next_workout_template<'a>(
    templates: &'a [WorkoutTemplate],
    sessions: &[Session],
) -> Option<&'a WorkoutTemplate> {
    let first = templates.first()?;
    let Some(last) = finished(sessions).max_by_key(|session| session.completed_at) else {
        return Some(first);
    };
    let next = templates
        .iter()
        .position(|template| template.id == last.template_id)
        .map_or(0, |index| (index + 1) % templates.len());
    templates.get(next)
}

/// Planned state of a weekday in the current week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "title", rename_all = "kebab-case")]
pub enum DayStatus {
    /// No template for the day
    Rest,
    /// A session on that date was completed
    Done,
    /// A session on that date is still open
    InProgress,
    /// Template exists but nothing started; carries its title
    Planned(String),
}

/// One weekday of the schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    /// Weekday
    pub day: DayOfWeek,
    /// Date of that weekday in the current week
    pub date: NaiveDate,
    /// Status
    pub status: DayStatus,
    /// Whether the date is today
    pub is_today: bool,
}

/// Sunday-to-Saturday status of the week containing `today`
#[must_use]
pub fn weekly_schedule(
    templates: &[WorkoutTemplate],
    sessions: &[Session],
    today: NaiveDate,
) -> Vec<ScheduleDay> {
    let sunday = today - Days::new(u64::from(today.weekday().num_days_from_sunday()));
    DayOfWeek::ALL
        .into_iter()
        .map(|day| {
            let date = sunday + Days::new(day.index() as u64);
            let status = templates
                .iter()
                .find(|template| template.day_of_week == day)
                .map_or(DayStatus::Rest, |template| {
                    match sessions
                        .iter()
                        .find(|session| session.date == date)
                        .map(|session| session.status)
                    {
                        Some(SessionStatus::Completed) => DayStatus::Done,
                        Some(SessionStatus::InProgress) => DayStatus::InProgress,
                        None => DayStatus::Planned(template.title.clone()),
                    }
                });
            ScheduleDay {
                day,
                date,
                status,
                is_today: date == today,
            }
        })
        .collect()
}

/// Whole years between `dob` and `today`
#[must_use]
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(dob).unwrap_or(0)
}

const fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => SEDENTARY_MULTIPLIER,
        ActivityLevel::Moderate => MODERATE_MULTIPLIER,
        ActivityLevel::Active => ACTIVE_MULTIPLIER,
    }
}

const fn exercise_bonus(frequency: ExerciseFrequency) -> f64 {
    match frequency {
        ExerciseFrequency::None => 0.0,
        ExerciseFrequency::Light => 100.0,
        ExerciseFrequency::Regular => 250.0,
        ExerciseFrequency::Daily => 400.0,
    }
}

/// Daily energy expenditure estimate (Mifflin-St Jeor), rounded to 10 kcal.
///
/// Weight is taken as kg and height as cm. Returns the default of 2200 when
/// date of birth, sex, weight, height, activity level or exercise frequency
/// is missing.
#[must_use]
pub fn calculate_tdee(profile: &UserProfile, today: NaiveDate) -> u32 {
    let (Some(dob), Some(sex), Some(activity), Some(frequency)) = (
        profile.dob,
        profile.sex,
        profile.activity_level,
        profile.exercise_frequency,
    ) else {
        return DEFAULT_TDEE;
    };
    if profile.weight <= 0.0 || profile.height <= 0.0 {
        return DEFAULT_TDEE;
    }

    let sex_offset = match sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    };
    let bmr = BMR_WEIGHT_FACTOR.mul_add(
        profile.weight,
        BMR_HEIGHT_FACTOR.mul_add(
            profile.height,
            BMR_AGE_FACTOR.mul_add(-f64::from(age_on(dob, today)), sex_offset),
        ),
    );
    let tdee = bmr.mul_add(activity_multiplier(activity), exercise_bonus(frequency));
    ((tdee / TDEE_ROUNDING).round() * TDEE_ROUNDING).max(0.0) as u32
}
