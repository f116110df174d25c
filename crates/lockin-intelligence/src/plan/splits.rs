// ABOUTME: Closed registry of weekly training splits and the plan generator
// ABOUTME: Maps (days per week, split) to weekday-bound templates from static tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::day_templates::{
    DayTemplate, ARMS, BACK, CHEST, FULL_BODY_A, FULL_BODY_B, FULL_BODY_C, LEGS_A, LEGS_B, PULL,
    PUSH, SHOULDERS, UPPER_A, UPPER_B,
};
use lockin_core::models::{DayOfWeek, WorkoutTemplate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use DayOfWeek::{Friday, Monday, Saturday, Thursday, Tuesday, Wednesday};

/// Weekly split pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitKind {
    /// Whole body every session
    FullBody,
    /// Alternating upper and lower days
    UpperLower,
    /// Push, pull and legs rotation
    PushPullLegs,
    /// One muscle group per day
    BroSplit,
}

impl SplitKind {
    /// Registry in declaration order
    pub const ALL: [Self; 4] = [
        Self::FullBody,
        Self::UpperLower,
        Self::PushPullLegs,
        Self::BroSplit,
    ];

    /// Stable key used to select the split
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::FullBody => "Full Body",
            Self::UpperLower => "Upper/Lower",
            Self::PushPullLegs => "Push/Pull/Legs",
            Self::BroSplit => "Bro Split",
        }
    }

    /// Name shown to the user
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::PushPullLegs => "Push/Pull/Legs (PPL)",
            other => other.key(),
        }
    }

    /// One-line description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::FullBody => {
                "Train your entire body each session, promoting overall strength and efficiency."
            }
            Self::UpperLower => "Split your training between upper body and lower body days.",
            Self::PushPullLegs => {
                "A classic split targeting specific muscle groups each day for balanced development."
            }
            Self::BroSplit => {
                "Focus on one major muscle group per day for high-volume, targeted training."
            }
        }
    }

    /// Training days per week this split can be generated for
    #[must_use]
    pub const fn supported_days(&self) -> &'static [u8] {
        match self {
            Self::FullBody => &[1, 2, 3],
            Self::UpperLower => &[2, 4],
            Self::PushPullLegs => &[3, 6],
            Self::BroSplit => &[4, 5],
        }
    }

    /// Whether `days` is a supported frequency
    #[must_use]
    pub fn supports(&self, days: u8) -> bool {
        self.supported_days().contains(&days)
    }

    /// Parse a key or display name, ignoring case and surrounding whitespace
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL.into_iter().find(|split| {
            split.key().eq_ignore_ascii_case(wanted)
                || split.display_name().eq_ignore_ascii_case(wanted)
        })
    }

    const fn id_tag(self) -> &'static str {
        match self {
            Self::FullBody => "fb",
            Self::UpperLower => "ul",
            Self::PushPullLegs => "ppl",
            Self::BroSplit => "bro",
        }
    }

    /// Weekday pattern and the day sequence laid over it (cycled when shorter)
    fn layout(self, days: u8) -> Option<(&'static [DayOfWeek], &'static [DayTemplate])> {
        let layout: (&'static [DayOfWeek], &'static [DayTemplate]) = match (self, days) {
            (Self::FullBody, 1) => (&[Wednesday], &[FULL_BODY_A]),
            (Self::FullBody, 2) => (&[Tuesday, Friday], &[FULL_BODY_A, FULL_BODY_B]),
            (Self::FullBody, 3) => (
                &[Monday, Wednesday, Friday],
                &[FULL_BODY_A, FULL_BODY_B, FULL_BODY_C],
            ),
            (Self::UpperLower, 2) => (&[Tuesday, Friday], &[UPPER_A, LEGS_A]),
            (Self::UpperLower, 4) => (
                &[Monday, Tuesday, Thursday, Friday],
                &[UPPER_A, LEGS_A, UPPER_B, LEGS_B],
            ),
            (Self::PushPullLegs, 3) => (&[Monday, Wednesday, Friday], &[PUSH, PULL, LEGS_A]),
            (Self::PushPullLegs, 6) => (
                &[Monday, Tuesday, Wednesday, Thursday, Friday, Saturday],
                &[PUSH, PULL, LEGS_A],
            ),
            (Self::BroSplit, 4) => (
                &[Monday, Tuesday, Thursday, Friday],
                &[CHEST, BACK, LEGS_A, SHOULDERS],
            ),
            (Self::BroSplit, 5) => (
                &[Monday, Tuesday, Wednesday, Thursday, Friday],
                &[CHEST, BACK, LEGS_A, SHOULDERS, ARMS],
            ),
            _ => return None,
        };
        Some(layout)
    }

    /// Generate the plan for `days` training days, or `None` when unsupported
    #[must_use]
    pub fn generate(self, days: u8) -> Option<Vec<WorkoutTemplate>> {
        let (weekdays, sequence) = self.layout(days)?;
        let tag = self.id_tag();
        let plan = weekdays
            .iter()
            .zip(sequence.iter().cycle())
            .enumerate()
            .map(|(index, (&day, template))| {
                template.instantiate(format!("preset_{tag}{days}_{index}"), day)
            })
            .collect();
        Some(plan)
    }
}

impl fmt::Display for SplitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Split offered for a day count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSummary {
    /// Selection key
    pub key: String,
    /// Display name
    pub name: String,
    /// One-line description
    pub description: String,
}

impl From<SplitKind> for SplitSummary {
    fn from(split: SplitKind) -> Self {
        Self {
            key: split.key().to_owned(),
            name: split.display_name().to_owned(),
            description: split.description().to_owned(),
        }
    }
}

/// Splits that support `days` training days per week, in registry order.
///
/// A day count no split supports yields an empty list.
#[must_use]
pub fn list_available_splits(days: u8) -> Vec<SplitSummary> {
    SplitKind::ALL
        .into_iter()
        .filter(|split| split.supports(days))
        .map(SplitSummary::from)
        .collect()
}

/// Generate a weekly plan for `days` training days using the named split.
///
/// Returns `None` when the split name is unknown or the split does not
/// support that many days.
#[must_use]
pub fn generate_plan(days: u8, split_name: &str) -> Option<Vec<WorkoutTemplate>> {
    let Some(split) = SplitKind::parse(split_name) else {
        debug!(split = split_name, "Unknown split requested");
        return None;
    };
    let plan = split.generate(days);
    if plan.is_none() {
        debug!(split = split.key(), days, "Split does not support day count");
    }
    plan
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn every_layout_pairs_distinct_weekdays_with_days_count() {
        for split in SplitKind::ALL {
            for &days in split.supported_days() {
                let Some((weekdays, sequence)) = split.layout(days) else {
                    panic!("{split} should support {days} days");
                };
                assert_eq!(weekdays.len(), usize::from(days));
                assert!(!sequence.is_empty());
                let mut sorted = weekdays.to_vec();
                sorted.sort();
                sorted.dedup();
                assert_eq!(sorted.len(), weekdays.len());
            }
        }
    }

    #[test]
    fn ids_follow_tag_and_day_count() {
        let plan = SplitKind::BroSplit.generate(5).unwrap_or_default();
        let ids: Vec<_> = plan.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "preset_bro5_0",
                "preset_bro5_1",
                "preset_bro5_2",
                "preset_bro5_3",
                "preset_bro5_4"
            ]
        );
    }

    #[test]
    fn parse_accepts_key_and_display_name() {
        assert_eq!(SplitKind::parse("push/pull/legs"), Some(SplitKind::PushPullLegs));
        assert_eq!(
            SplitKind::parse("Push/Pull/Legs (PPL)"),
            Some(SplitKind::PushPullLegs)
        );
        assert_eq!(SplitKind::parse(" bro split "), Some(SplitKind::BroSplit));
        assert_eq!(SplitKind::parse("Custom"), None);
    }
}
