//! Workstation metrics.
//!
//! overall = 100 × (0.40 × completion + 0.30 × productivity + 0.30 × quality/100)
//!
//! Every ratio is guarded against a zero or negative denominator and
//! productive hours are clamped at zero, so no output is NaN or infinite.

use crate::models::{Metrics, WorkstationInput};

pub const COMPLETION_WEIGHT: f64 = 0.40;
pub const PRODUCTIVITY_WEIGHT: f64 = 0.30;
pub const QUALITY_WEIGHT: f64 = 0.30;

pub fn calculate(input: &WorkstationInput) -> Metrics {
    let completion = ratio(input.tasks_completed, input.total_tasks);
    let productive_hours = (input.hours_worked - input.downtime).max(0.0);
    let productivity = ratio(productive_hours, input.hours_worked);
    let tasks_per_hour = ratio(input.tasks_completed, input.hours_worked);

    // Weights are applied to percentages so round numbers stay exact.
    let overall = COMPLETION_WEIGHT * 100.0 * completion
        + PRODUCTIVITY_WEIGHT * 100.0 * productivity
        + QUALITY_WEIGHT * input.quality_score;

    Metrics {
        completion_rate: round_to(completion * 100.0, 1),
        productivity_rate: round_to(productivity * 100.0, 1),
        tasks_per_hour: round_to(tasks_per_hour, 2),
        productive_hours: round_to(productive_hours, 1),
        overall_efficiency: round_to(overall, 1),
    }
}

/// `num / den`, or 0 when the denominator is not positive.
fn ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 { num / den } else { 0.0 }
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() { rounded } else { 0.0 }
}
