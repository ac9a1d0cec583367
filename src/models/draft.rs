use super::field::Field;
use serde::{Deserialize, Serialize};

/// Uncommitted form state: six free-text fields exactly as typed.
///
/// A draft is only cleared after a successful submit, so a rejected
/// submission leaves every value in place for correction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkstationDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tasks_completed: String,
    #[serde(default)]
    pub total_tasks: String,
    #[serde(default)]
    pub hours_worked: String,
    #[serde(default)]
    pub downtime: String,
    #[serde(default)]
    pub quality_score: String,
}

impl WorkstationDraft {
    pub fn new(
        name: impl Into<String>,
        tasks_completed: impl Into<String>,
        total_tasks: impl Into<String>,
        hours_worked: impl Into<String>,
        downtime: impl Into<String>,
        quality_score: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tasks_completed: tasks_completed.into(),
            total_tasks: total_tasks.into(),
            hours_worked: hours_worked.into(),
            downtime: downtime.into(),
            quality_score: quality_score.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::TasksCompleted => &self.tasks_completed,
            Field::TotalTasks => &self.total_tasks,
            Field::HoursWorked => &self.hours_worked,
            Field::Downtime => &self.downtime,
            Field::QualityScore => &self.quality_score,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::TasksCompleted => &mut self.tasks_completed,
            Field::TotalTasks => &mut self.total_tasks,
            Field::HoursWorked => &mut self.hours_worked,
            Field::Downtime => &mut self.downtime,
            Field::QualityScore => &mut self.quality_score,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).trim().is_empty())
    }
}
