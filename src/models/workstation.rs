use super::metrics::Metrics;
use chrono::Local;
use serde::Serialize;

pub type WorkstationId = u32;

/// Raw form values after validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkstationInput {
    pub name: String,
    pub tasks_completed: f64,
    pub total_tasks: f64,
    pub hours_worked: f64,
    pub downtime: f64,
    pub quality_score: f64,
}

/// A committed workstation: raw inputs plus metrics computed at creation.
///
/// Fields are private so a stored record can never be edited in place.
#[derive(Debug, Clone, Serialize)]
pub struct WorkstationRecord {
    id: WorkstationId,
    #[serde(flatten)]
    input: WorkstationInput,
    #[serde(flatten)]
    metrics: Metrics,
    created_at: String,
}

impl WorkstationRecord {
    pub(crate) fn new(id: WorkstationId, input: WorkstationInput, metrics: Metrics) -> Self {
        Self {
            id,
            input,
            metrics,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn id(&self) -> WorkstationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.input.name
    }

    pub fn input(&self) -> &WorkstationInput {
        &self.input
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}
