use serde::Serialize;

/// The six inputs of the workstation form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    TasksCompleted,
    TotalTasks,
    HoursWorked,
    Downtime,
    QualityScore,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::TasksCompleted,
        Field::TotalTasks,
        Field::HoursWorked,
        Field::Downtime,
        Field::QualityScore,
    ];

    /// Column / key name used in CSV headers and config-like output.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::TasksCompleted => "tasks_completed",
            Field::TotalTasks => "total_tasks",
            Field::HoursWorked => "hours_worked",
            Field::Downtime => "downtime",
            Field::QualityScore => "quality_score",
        }
    }

    /// Human label shown in prompts and error hints.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Workstation Name",
            Field::TasksCompleted => "Tasks Completed",
            Field::TotalTasks => "Total Tasks",
            Field::HoursWorked => "Hours Worked",
            Field::Downtime => "Downtime (hours)",
            Field::QualityScore => "Quality Score (0-100)",
        }
    }

    /// Parse a user-typed field name, accepting short aliases and dashes.
    pub fn from_alias(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "name" => Some(Field::Name),
            "tasks" | "tasks_completed" | "completed" => Some(Field::TasksCompleted),
            "total" | "total_tasks" => Some(Field::TotalTasks),
            "hours" | "hours_worked" => Some(Field::HoursWorked),
            "downtime" | "down" => Some(Field::Downtime),
            "quality" | "quality_score" => Some(Field::QualityScore),
            _ => None,
        }
    }
}

/// Join field labels for hint lines, e.g. "Total Tasks, Downtime (hours)".
pub fn describe_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}
