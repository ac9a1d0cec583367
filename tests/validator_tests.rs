mod common;
use common::station_a;
use workpulse::core::validator::validate;
use workpulse::errors::ValidationError;
use workpulse::models::{Field, WorkstationDraft};

#[test]
fn test_accepts_complete_draft() {
    let input = validate(&station_a()).expect("valid");
    assert_eq!(input.name, "Station A");
    assert_eq!(input.tasks_completed, 8.0);
    assert_eq!(input.total_tasks, 10.0);
    assert_eq!(input.hours_worked, 8.0);
    assert_eq!(input.downtime, 1.0);
    assert_eq!(input.quality_score, 90.0);
}

#[test]
fn test_missing_fields_are_listed() {
    let mut d = station_a();
    d.set(Field::TotalTasks, "");
    d.set(Field::Name, "   ");

    let err = validate(&d).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingFields(vec![Field::Name, Field::TotalTasks])
    );
    assert_eq!(err.to_string(), "Please fill in all fields");
}

#[test]
fn test_blank_draft_reports_every_field() {
    let err = validate(&WorkstationDraft::default()).unwrap_err();
    assert_eq!(err.fields(), &Field::ALL);
}

#[test]
fn test_zero_total_tasks_rejected() {
    let mut d = station_a();
    d.set(Field::TotalTasks, "0");

    let err = validate(&d).unwrap_err();
    assert_eq!(err, ValidationError::InvalidValues(vec![Field::TotalTasks]));
    assert_eq!(
        err.to_string(),
        "Please enter valid positive numbers (quality score must be 0-100)"
    );
}

#[test]
fn test_range_rules() {
    let cases = [
        (Field::TasksCompleted, "-1"),
        (Field::TotalTasks, "-3"),
        (Field::HoursWorked, "0"),
        (Field::Downtime, "-0.5"),
        (Field::QualityScore, "100.1"),
        (Field::QualityScore, "-1"),
    ];

    for (field, value) in cases {
        let mut d = station_a();
        d.set(field, value);
        assert_eq!(
            validate(&d).unwrap_err(),
            ValidationError::InvalidValues(vec![field]),
            "{field:?} = {value}"
        );
    }
}

#[test]
fn test_boundary_values_accepted() {
    let d = WorkstationDraft::new("Edge", "0", "1", "0.5", "0.5", "100");
    assert!(validate(&d).is_ok());

    let d = WorkstationDraft::new("Edge", "0", "1", "0.5", "0", "0");
    assert!(validate(&d).is_ok());
}

#[test]
fn test_non_numbers_rejected() {
    for bad in ["abc", "NaN", "inf", "8h", "1,5"] {
        let mut d = station_a();
        d.set(Field::HoursWorked, bad);
        assert_eq!(
            validate(&d).unwrap_err(),
            ValidationError::InvalidValues(vec![Field::HoursWorked]),
            "{bad}"
        );
    }
}

#[test]
fn test_downtime_exceeding_hours_rejected() {
    let mut d = station_a();
    d.set(Field::Downtime, "9");

    let err = validate(&d).unwrap_err();
    assert_eq!(err, ValidationError::DowntimeExceedsHours);
    assert_eq!(err.to_string(), "Downtime cannot exceed hours worked");
    assert!(err.fields().is_empty());
}

#[test]
fn test_first_failing_rule_wins() {
    // Missing name beats the out-of-range downtime.
    let d = WorkstationDraft::new("", "8", "10", "8", "9", "900");
    assert!(matches!(
        validate(&d),
        Err(ValidationError::MissingFields(_))
    ));

    // Range rule beats the downtime rule.
    let d = WorkstationDraft::new("A", "8", "10", "8", "9", "900");
    assert_eq!(
        validate(&d).unwrap_err(),
        ValidationError::InvalidValues(vec![Field::QualityScore])
    );
}

#[test]
fn test_values_are_trimmed() {
    let d = WorkstationDraft::new("  Line 2 ", " 8 ", "10\t", " 8", "1 ", " 90 ");
    let input = validate(&d).expect("valid");
    assert_eq!(input.name, "Line 2");
    assert_eq!(input.quality_score, 90.0);
}
