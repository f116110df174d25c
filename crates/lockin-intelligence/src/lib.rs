// ABOUTME: Plan generator, activity aggregator and training statistics for LockIn
// ABOUTME: Pure, synchronous functions over records already loaded into memory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LockIn Intelligence
//!
//! Everything in this crate is a pure function of its inputs: callers pass
//! the records and the current date (and time zone where hours matter), so
//! running the same aggregation twice over unchanged data gives the same
//! answer.
//!
//! - **plan**: split registry, plan generation and the custom plan builder
//! - **nutrition**: calorie and macro totals for a daily log
//! - **goals**: rolling seven-day goal achievement
//! - **activity**: hourly histogram and day/week/month period views
//! - **training**: volume, streak, rotation, weekly schedule and TDEE

/// Workout plan generation
pub mod plan;

/// Calorie and macro totals
pub mod nutrition;

/// Seven-day goal achievement series
pub mod goals;

/// Hourly histogram and period views
pub mod activity;

/// Training statistics derived from sessions and the profile
pub mod training;
