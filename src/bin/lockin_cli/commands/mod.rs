// ABOUTME: Re-exports command modules for lockin-cli
// ABOUTME: One module per top-level subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod activity;
pub mod history;
pub mod nutrition;
pub mod plan;
pub mod workout;
