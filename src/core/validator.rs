//! Form gate: turns a free-text draft into validated numeric input.
//!
//! Rules run in order and the first failing rule wins:
//! 1. every field is filled in (whitespace-only counts as empty);
//! 2. every number parses, is finite and lies in its allowed range;
//! 3. downtime does not exceed hours worked.

use crate::errors::ValidationError;
use crate::models::{Field, WorkstationDraft, WorkstationInput};

pub fn validate(draft: &WorkstationDraft) -> Result<WorkstationInput, ValidationError> {
    //
    // 1. Missing fields
    //
    let missing: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|f| draft.get(*f).trim().is_empty())
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    //
    // 2. Numeric ranges
    //
    let tasks_completed = parse_number(draft.get(Field::TasksCompleted));
    let total_tasks = parse_number(draft.get(Field::TotalTasks));
    let hours_worked = parse_number(draft.get(Field::HoursWorked));
    let downtime = parse_number(draft.get(Field::Downtime));
    let quality_score = parse_number(draft.get(Field::QualityScore));

    let mut invalid = Vec::new();
    if !tasks_completed.is_some_and(|v| v >= 0.0) {
        invalid.push(Field::TasksCompleted);
    }
    if !total_tasks.is_some_and(|v| v > 0.0) {
        invalid.push(Field::TotalTasks);
    }
    if !hours_worked.is_some_and(|v| v > 0.0) {
        invalid.push(Field::HoursWorked);
    }
    if !downtime.is_some_and(|v| v >= 0.0) {
        invalid.push(Field::Downtime);
    }
    if !quality_score.is_some_and(|v| (0.0..=100.0).contains(&v)) {
        invalid.push(Field::QualityScore);
    }

    let (
        Some(tasks_completed),
        Some(total_tasks),
        Some(hours_worked),
        Some(downtime),
        Some(quality_score),
    ) = (tasks_completed, total_tasks, hours_worked, downtime, quality_score)
    else {
        return Err(ValidationError::InvalidValues(invalid));
    };

    if !invalid.is_empty() {
        return Err(ValidationError::InvalidValues(invalid));
    }

    //
    // 3. Cross-field rule
    //
    if downtime > hours_worked {
        return Err(ValidationError::DowntimeExceedsHours);
    }

    Ok(WorkstationInput {
        name: draft.get(Field::Name).trim().to_string(),
        tasks_completed,
        total_tasks,
        hours_worked,
        downtime,
        quality_score,
    })
}

/// Parse a numeric form value; NaN and infinities are not numbers here.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
