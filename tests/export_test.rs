// ABOUTME: Integration tests for CSV export of completed workouts
// ABOUTME: Covers header, row selection, timestamps, workout titles and field quoting
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{at, completed_session, date, memory_repo, performed_session, USER};
use lockin::core::models::{DayOfWeek, Session, TemplateExercise, WorkoutTemplate};
use lockin::export::{export_history, sessions_to_csv};
use lockin::services::plans::save_plan;

const HEADER: &str = "Session ID,Date,Completed At,Workout,Exercise,Set,Reps,Weight,Volume,Unit";

fn squat_day(title: &str) -> WorkoutTemplate {
    WorkoutTemplate {
        id: "template-squat".into(),
        day_of_week: DayOfWeek::Tuesday,
        title: title.into(),
        exercises: vec![TemplateExercise::new("leg_61", 2, "5")],
    }
}

fn rows(csv: &str) -> Vec<&str> {
    csv.split("\r\n").filter(|line| !line.is_empty()).collect()
}

#[test]
fn test_empty_history_is_header_only() -> Result<()> {
    let csv = sessions_to_csv(&[], &[])?;
    assert_eq!(csv, format!("{HEADER}\r\n"));
    Ok(())
}

#[test]
fn test_one_row_per_set_of_completed_sessions() -> Result<()> {
    let template = squat_day("Legs");
    let done = completed_session(&template, date(2026, 10, 13));
    let open = performed_session(&template, date(2026, 10, 15), 5, 100.0);

    let csv = sessions_to_csv(&[done.clone(), open], std::slice::from_ref(&template))?;
    let lines = rows(&csv);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], HEADER);

    let set_time = done.exercises[0].sets[0].completed_at.unwrap().to_rfc3339();
    assert_eq!(
        lines[1],
        format!(
            "{},2026-10-13,{set_time},Legs,Squat (Barbell),1,10,50,500,kg",
            done.id
        )
    );
    assert!(lines[2].contains(",2,10,50,500,kg"));
    assert!(csv.ends_with("\r\n"));
    Ok(())
}

#[test]
fn test_unfinished_set_uses_session_completion_time() -> Result<()> {
    let template = squat_day("Legs");
    let mut session = Session::start(&template, date(2026, 10, 13), Default::default());
    let finished_at = at(2026, 10, 13, 19, 45);
    session.finish(finished_at);

    let csv = sessions_to_csv(&[session], &[])?;
    let lines = rows(&csv);
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains(&format!(",{},Custom Workout,", finished_at.to_rfc3339())));
    assert!(lines[1].ends_with(",1,0,0,0,kg"));
    Ok(())
}

#[test]
fn test_fields_with_commas_and_quotes_are_quoted() -> Result<()> {
    let template = squat_day("Legs, \"heavy\"");
    let done = completed_session(&template, date(2026, 10, 13));
    let csv = sessions_to_csv(&[done], &[template])?;
    assert!(csv.contains(",\"Legs, \"\"heavy\"\"\",Squat (Barbell),"));
    Ok(())
}

#[test]
fn test_multiline_title_is_quoted_and_kept_whole() -> Result<()> {
    let template = squat_day("Legs\nheavy");
    let done = completed_session(&template, date(2026, 10, 13));
    let csv = sessions_to_csv(&[done], &[template])?;

    let mut reader = csv::ReaderBuilder::new().from_reader(csv.as_bytes());
    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][3], "Legs\nheavy");
    assert_eq!(&records[0][5], "1");
    Ok(())
}

#[tokio::test]
async fn test_export_history_reads_saved_records() -> Result<()> {
    let repo = memory_repo();
    let plan = save_plan(&repo, USER, vec![squat_day("Legs")]).await?;
    repo.save_sessions(USER, &[completed_session(&plan[0], date(2026, 10, 13))])
        .await?;

    let csv = export_history(&repo, USER).await?;
    let lines = rows(&csv);
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains(",Legs,"));
    Ok(())
}
