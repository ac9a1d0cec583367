//! Session controller: the single owner of the store and the draft.
//!
//! Submit and delete are the only ways the store changes.

use crate::core::store::SessionStore;
use crate::core::{calculator, validator};
use crate::errors::ValidationError;
use crate::models::{Field, WorkstationDraft, WorkstationId, WorkstationRecord};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct Session {
    store: SessionStore,
    draft: WorkstationDraft,
}

impl Session {
    pub fn new() -> Self {
        Self::with_store(SessionStore::new())
    }

    pub fn with_store(store: SessionStore) -> Self {
        Self {
            store,
            draft: WorkstationDraft::default(),
        }
    }

    pub fn draft(&self) -> &WorkstationDraft {
        &self.draft
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Replace the whole draft, e.g. with a row read from a file.
    pub fn load_draft(&mut self, draft: WorkstationDraft) {
        self.draft = draft;
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    /// Validate the draft, compute its metrics and commit it.
    ///
    /// On rejection neither the store nor the draft change.
    pub fn submit(&mut self) -> Result<&WorkstationRecord, ValidationError> {
        let input = match validator::validate(&self.draft) {
            Ok(input) => input,
            Err(e) => {
                debug!(reason = %e, fields = ?e.fields(), "draft rejected");
                return Err(e);
            }
        };

        let metrics = calculator::calculate(&input);
        self.draft.clear();

        let record = self.store.add(input, metrics);
        info!(id = record.id(), name = record.name(), "workstation added");
        Ok(record)
    }

    pub fn delete(&mut self, id: WorkstationId) -> bool {
        let removed = self.store.remove(id);
        if removed {
            info!(id, "workstation deleted");
        }
        removed
    }

    pub fn records(&self) -> &[WorkstationRecord] {
        self.store.list()
    }

    pub fn average_efficiency(&self) -> f64 {
        self.store.average_efficiency()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}
