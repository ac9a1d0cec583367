use serde::Serialize;

/// Derived values of one workstation, already rounded for display.
///
/// Percentages and `productive_hours` carry 1 decimal, `tasks_per_hour` 2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub completion_rate: f64,
    pub productivity_rate: f64,
    pub tasks_per_hour: f64,
    pub productive_hours: f64,
    pub overall_efficiency: f64,
}
