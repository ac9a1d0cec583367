use crate::core::presenter::classify;
use crate::core::session::Session;
use crate::models::{Tier, WorkstationRecord};
use serde::Serialize;

/// Flat row for CSV / JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct WorkstationExport {
    pub id: u32,
    pub name: String,
    pub tasks_completed: f64,
    pub total_tasks: f64,
    pub hours_worked: f64,
    pub downtime: f64,
    pub quality_score: f64,
    pub completion_rate: f64,
    pub productivity_rate: f64,
    pub tasks_per_hour: f64,
    pub productive_hours: f64,
    pub overall_efficiency: f64,
    pub tier: Tier,
    pub created_at: String,
}

impl From<&WorkstationRecord> for WorkstationExport {
    fn from(r: &WorkstationRecord) -> Self {
        let input = r.input();
        let m = r.metrics();
        Self {
            id: r.id(),
            name: r.name().to_string(),
            tasks_completed: input.tasks_completed,
            total_tasks: input.total_tasks,
            hours_worked: input.hours_worked,
            downtime: input.downtime,
            quality_score: input.quality_score,
            completion_rate: m.completion_rate,
            productivity_rate: m.productivity_rate,
            tasks_per_hour: m.tasks_per_hour,
            productive_hours: m.productive_hours,
            overall_efficiency: m.overall_efficiency,
            tier: classify(m.overall_efficiency),
            created_at: r.created_at().to_string(),
        }
    }
}

/// JSON document: the rows plus the session aggregate.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub workstations: Vec<WorkstationExport>,
    pub average_efficiency: f64,
    pub count: usize,
}

impl From<&Session> for SessionExport {
    fn from(s: &Session) -> Self {
        let workstations: Vec<WorkstationExport> =
            s.records().iter().map(WorkstationExport::from).collect();
        Self {
            count: workstations.len(),
            average_efficiency: s.average_efficiency(),
            workstations,
        }
    }
}
