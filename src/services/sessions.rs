// ABOUTME: Workout session lifecycle: start, edit sets, add exercises, save and finish
// ABOUTME: Sessions move one way from in-progress to completed; completed ones are edited in place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::storage::{RecordStore, UserRepository};
use chrono::{DateTime, NaiveDate, Utc};
use lockin_core::catalog::find_exercise;
use lockin_core::constants::sessions::ADDED_EXERCISE_SETS;
use lockin_core::errors::{AppError, AppResult};
use lockin_core::models::{Session, SessionExercise, SetEntry, SetUpdate, WorkoutTemplate};
use tracing::info;

/// Insert or replace `session` by id
///
/// # Errors
///
/// Returns an error if the sessions record cannot be written
pub async fn save_session<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    session: &Session,
) -> AppResult<()> {
    let mut sessions = repo.sessions(user).await?;
    match sessions.iter_mut().find(|existing| existing.id == session.id) {
        Some(existing) => existing.clone_from(session),
        None => sessions.push(session.clone()),
    }
    repo.save_sessions(user, &sessions).await
}

/// Session by id
///
/// # Errors
///
/// Returns `ResourceNotFound` when no session has that id
pub async fn find_session<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    session_id: &str,
) -> AppResult<Session> {
    repo.sessions(user)
        .await?
        .into_iter()
        .find(|session| session.id == session_id)
        .ok_or_else(|| AppError::not_found(format!("Session {session_id}")))
}

/// Load a session, apply `change` and save it back
async fn modify_session<S, F>(
    repo: &UserRepository<S>,
    user: &str,
    session_id: &str,
    change: F,
) -> AppResult<Session>
where
    S: RecordStore,
    F: FnOnce(&mut Session) -> AppResult<()> + Send,
{
    let mut sessions = repo.sessions(user).await?;
    let session = sessions
        .iter_mut()
        .find(|session| session.id == session_id)
        .ok_or_else(|| AppError::not_found(format!("Session {session_id}")))?;
    change(session)?;
    let updated = session.clone();
    repo.save_sessions(user, &sessions).await?;
    Ok(updated)
}

fn exercise_mut<'a>(
    session: &'a mut Session,
    exercise_id: &str,
) -> AppResult<&'a mut SessionExercise> {
    session
        .exercise_mut(exercise_id)
        .ok_or_else(|| AppError::not_found(format!("Exercise {exercise_id} in session")))
}

/// Start a session from `template` on `date` in the user's weight unit and persist it
///
/// # Errors
///
/// Returns an error if the unit or sessions record cannot be read or written
pub async fn start_workout<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    template: &WorkoutTemplate,
    date: NaiveDate,
) -> AppResult<Session> {
    let unit = repo.unit(user).await?;
    let session = Session::start(template, date, unit);
    save_session(repo, user, &session).await?;
    info!(
        session_id = %session.id,
        template = %template.title,
        %date,
        "Workout started"
    );
    Ok(session)
}

/// Edit one set; volume is recomputed and the first completion is stamped
///
/// # Errors
///
/// Returns `InvalidInput` when the weight is negative or not finite, and
/// `ResourceNotFound` when the session, exercise or set does not exist
pub async fn update_set<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    session_id: &str,
    exercise_id: &str,
    set_id: &str,
    update: SetUpdate,
    now: DateTime<Utc>,
) -> AppResult<Session> {
    if let Some(weight) = update.weight {
        if !weight.is_finite() || weight < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Weight must be zero or more, got {weight}"
            )));
        }
    }
    modify_session(repo, user, session_id, |session| {
        let set = exercise_mut(session, exercise_id)?
            .sets
            .iter_mut()
            .find(|set| set.id == set_id)
            .ok_or_else(|| AppError::not_found(format!("Set {set_id}")))?;
        set.apply(update, now);
        Ok(())
    })
    .await
}

/// Append a blank set to an exercise
///
/// # Errors
///
/// Returns `ResourceNotFound` when the session or exercise does not exist
pub async fn add_set<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    session_id: &str,
    exercise_id: &str,
) -> AppResult<Session> {
    modify_session(repo, user, session_id, |session| {
        exercise_mut(session, exercise_id)?.sets.push(SetEntry::empty());
        Ok(())
    })
    .await
}

/// Remove a set from an exercise
///
/// # Errors
///
/// Returns `ResourceNotFound` when the session, exercise or set does not exist
pub async fn remove_set<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    session_id: &str,
    exercise_id: &str,
    set_id: &str,
) -> AppResult<Session> {
    modify_session(repo, user, session_id, |session| {
        let sets = &mut exercise_mut(session, exercise_id)?.sets;
        let before = sets.len();
        sets.retain(|set| set.id != set_id);
        if sets.len() == before {
            return Err(AppError::not_found(format!("Set {set_id}")));
        }
        Ok(())
    })
    .await
}

/// Add catalog exercises with three blank sets each; ids already in the session are skipped
///
/// # Errors
///
/// Returns `ResourceNotFound` for the session or for an id missing from the catalog
pub async fn add_exercises<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    session_id: &str,
    exercise_ids: &[String],
) -> AppResult<Session> {
    modify_session(repo, user, session_id, |session| {
        for exercise_id in exercise_ids {
            if session.exercises.iter().any(|ex| &ex.id == exercise_id) {
                continue;
            }
            if find_exercise(exercise_id).is_none() {
                return Err(AppError::not_found(format!("Exercise {exercise_id}")));
            }
            session
                .exercises
                .push(SessionExercise::snapshot(exercise_id, ADDED_EXERCISE_SETS));
        }
        Ok(())
    })
    .await
}

/// Leave the session open, storing its current volume
///
/// # Errors
///
/// Returns `ResourceNotFound` when the session does not exist
pub async fn save_and_exit<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    session_id: &str,
) -> AppResult<Session> {
    modify_session(repo, user, session_id, |session| {
        session.refresh_volume();
        Ok(())
    })
    .await
}

/// Complete the session and freeze its volume
///
/// # Errors
///
/// Returns `ResourceNotFound` when the session does not exist
pub async fn finish_workout<S: RecordStore>(
    repo: &UserRepository<S>,
    user: &str,
    session_id: &str,
    now: DateTime<Utc>,
) -> AppResult<Session> {
    let session = modify_session(repo, user, session_id, |session| {
        session.finish(now);
        Ok(())
    })
    .await?;
    info!(
        session_id = %session.id,
        total_volume = session.total_volume,
        "Workout finished"
    );
    Ok(session)
}
