use crate::core::calculator::round_to;
use crate::models::{Metrics, WorkstationId, WorkstationInput, WorkstationRecord};
use tracing::debug;

/// Ordered, in-memory list of committed workstations.
///
/// Lives as long as the session that owns it. Ids start at 1 and are never
/// reused, even after a removal.
#[derive(Debug)]
pub struct SessionStore {
    records: Vec<WorkstationRecord>,
    next_id: WorkstationId,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a record built from validated input and its metrics.
    pub fn add(&mut self, input: WorkstationInput, metrics: Metrics) -> &WorkstationRecord {
        let id = self.next_id;
        self.next_id += 1;

        debug!(id, name = %input.name, efficiency = metrics.overall_efficiency, "store add");
        self.records.push(WorkstationRecord::new(id, input, metrics));

        &self.records[self.records.len() - 1]
    }

    /// Remove by id. Returns false (and changes nothing) when absent.
    pub fn remove(&mut self, id: WorkstationId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        let removed = self.records.len() != before;

        debug!(id, removed, "store remove");
        removed
    }

    pub fn list(&self) -> &[WorkstationRecord] {
        &self.records
    }

    pub fn get(&self, id: WorkstationId) -> Option<&WorkstationRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mean of the stored overall efficiencies; exactly 0 when empty.
    pub fn average_efficiency(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }

        let sum: f64 = self
            .records
            .iter()
            .map(|r| r.metrics().overall_efficiency)
            .sum();

        round_to(sum / self.records.len() as f64, 1)
    }
}
