mod common;
use common::{approx, station_a, station_b, station_c};
use workpulse::core::calculator::{calculate, round_to};
use workpulse::core::validator::validate;
use workpulse::models::WorkstationInput;

fn input(tasks: f64, total: f64, hours: f64, down: f64, quality: f64) -> WorkstationInput {
    WorkstationInput {
        name: "X".into(),
        tasks_completed: tasks,
        total_tasks: total,
        hours_worked: hours,
        downtime: down,
        quality_score: quality,
    }
}

#[test]
fn test_worked_example() {
    let m = calculate(&validate(&station_a()).expect("valid"));

    assert!(approx(m.completion_rate, 80.0));
    assert!(approx(m.productive_hours, 7.0));
    assert!(approx(m.productivity_rate, 87.5));
    assert!(approx(m.tasks_per_hour, 1.0));
    assert!(approx(m.overall_efficiency, 85.3));
    assert_eq!(format!("{:.1}", m.overall_efficiency), "85.3");
}

#[test]
fn test_other_reference_stations() {
    let b = calculate(&validate(&station_b()).expect("valid"));
    assert!(approx(b.completion_rate, 50.0));
    assert!(approx(b.productivity_rate, 75.0));
    assert!(approx(b.tasks_per_hour, 0.63));
    assert!(approx(b.overall_efficiency, 63.5));

    let c = calculate(&validate(&station_c()).expect("valid"));
    assert!(approx(c.overall_efficiency, 38.0));
}

#[test]
fn test_rates_are_rounded() {
    // 1/3 completion, 2/3 tasks per hour
    let m = calculate(&input(1.0, 3.0, 1.5, 0.0, 100.0));
    assert!(approx(m.completion_rate, 33.3));
    assert!(approx(m.tasks_per_hour, 0.67));
    assert!(approx(m.productivity_rate, 100.0));
}

#[test]
fn test_is_deterministic() {
    let i = validate(&station_b()).expect("valid");
    assert_eq!(calculate(&i), calculate(&i));
}

#[test]
fn test_negative_productive_time_is_clamped() {
    let m = calculate(&input(4.0, 10.0, 8.0, 9.0, 80.0));
    assert_eq!(m.productive_hours, 0.0);
    assert_eq!(m.productivity_rate, 0.0);
    assert!(m.overall_efficiency.is_finite());
}

#[test]
fn test_zero_denominators_yield_zero() {
    let m = calculate(&input(4.0, 0.0, 0.0, 0.0, 0.0));
    assert_eq!(m.completion_rate, 0.0);
    assert_eq!(m.productivity_rate, 0.0);
    assert_eq!(m.tasks_per_hour, 0.0);
    assert_eq!(m.overall_efficiency, 0.0);
}

#[test]
fn test_efficiency_stays_within_bounds_for_valid_inputs() {
    let totals = [1.0, 3.0, 10.0, 250.0];
    let hours = [0.5, 1.0, 7.5, 12.0];
    let qualities = [0.0, 33.0, 99.5, 100.0];

    for total in totals {
        for done in [0.0, total / 2.0, total] {
            for h in hours {
                for down in [0.0, h / 3.0, h] {
                    for q in qualities {
                        let m = calculate(&input(done, total, h, down, q));
                        assert!(
                            (0.0..=100.0).contains(&m.overall_efficiency),
                            "out of range: {m:?}"
                        );
                        assert!((0.0..=100.0).contains(&m.completion_rate));
                    }
                }
            }
        }
    }
}

#[test]
fn test_round_to_half_away_from_zero() {
    assert_eq!(round_to(85.25, 1), 85.3);
    assert_eq!(round_to(0.125, 2), 0.13);
    assert_eq!(round_to(f64::NAN, 1), 0.0);
}
