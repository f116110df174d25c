// ABOUTME: CSV export of completed workout history, one row per performed set
// ABOUTME: Written with the csv crate using RFC 4180 quoting and CRLF row endings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::storage::{RecordStore, UserRepository};
use csv::{Terminator, WriterBuilder};
use lockin_core::constants::plans::CUSTOM_WORKOUT_TITLE;
use lockin_core::errors::{AppError, AppResult, ErrorCode};
use lockin_core::models::{Session, WorkoutTemplate};
use std::collections::HashMap;
use tracing::info;

/// Column header of the history export
pub const CSV_HEADER: [&str; 10] = [
    "Session ID",
    "Date",
    "Completed At",
    "Workout",
    "Exercise",
    "Set",
    "Reps",
    "Weight",
    "Volume",
    "Unit",
];

fn csv_error(error: csv::Error) -> AppError {
    AppError::new(ErrorCode::SerializationError, format!("CSV error: {error}")).with_source(error)
}

/// Render completed sessions as CSV.
///
/// Sessions that are not completed, or lack a completion time, are skipped.
/// Each set's own completion time is preferred over the session's.
///
/// # Errors
///
/// Returns an error if a row cannot be written to the output buffer
pub fn sessions_to_csv(sessions: &[Session], templates: &[WorkoutTemplate]) -> AppResult<String> {
    let titles: HashMap<&str, &str> = templates
        .iter()
        .map(|template| (template.id.as_str(), template.title.as_str()))
        .collect();

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER).map_err(csv_error)?;

    for session in sessions {
        let Some(session_completed_at) = session.completed_at.filter(|_| session.is_completed())
        else {
            continue;
        };
        let workout = titles
            .get(session.template_id.as_str())
            .copied()
            .unwrap_or(CUSTOM_WORKOUT_TITLE);
        let date = session.date.to_string();
        let unit = session.unit.as_str();

        for exercise in &session.exercises {
            for (index, set) in exercise.sets.iter().enumerate() {
                let completed_at = set.completed_at.unwrap_or(session_completed_at);
                writer
                    .write_record([
                        session.id.as_str(),
                        date.as_str(),
                        completed_at.to_rfc3339().as_str(),
                        workout,
                        exercise.name.as_str(),
                        (index + 1).to_string().as_str(),
                        set.reps.to_string().as_str(),
                        set.weight.to_string().as_str(),
                        set.volume.to_string().as_str(),
                        unit,
                    ])
                    .map_err(csv_error)?;
            }
        }
    }

    let bytes = writer.into_inner().map_err(|error| {
        AppError::internal(format!("CSV buffer flush failed: {}", error.error()))
    })?;
    String::from_utf8(bytes)
        .map_err(|error| AppError::internal("CSV output is not UTF-8").with_source(error))
}

/// Export the user's completed workout history
///
/// # Errors
///
/// Returns an error if the sessions or templates record cannot be read
pub async fn export_history<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
) -> AppResult<String> {
    let sessions = repo.sessions(user).await?;
    let templates = repo.templates(user).await?;
    let csv = sessions_to_csv(&sessions, &templates)?;
    info!(
        user,
        sessions = sessions.iter().filter(|s| s.is_completed()).count(),
        bytes = csv.len(),
        "Workout history exported"
    );
    Ok(csv)
}
