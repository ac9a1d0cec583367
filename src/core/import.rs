//! CSV input for `report`: one workstation draft per row.

use crate::errors::{AppError, AppResult};
use crate::models::{Field, WorkstationDraft};
use std::path::Path;
use tracing::debug;

/// Read drafts from a CSV file whose header names the six form fields.
///
/// Each draft comes with the file line it was read from (the header is
/// line 1; blank lines are skipped but still counted). Values are kept as
/// text; validation happens later, row by row.
pub fn read_drafts(path: &Path) -> AppResult<Vec<(u64, WorkstationDraft)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    let known: Vec<&str> = Field::ALL.iter().map(|f| f.key()).collect();
    if !headers.iter().any(|h| known.contains(&h)) {
        return Err(AppError::Import(format!(
            "no workstation columns found in {} (expected header: {})",
            path.display(),
            known.join(",")
        )));
    }

    let mut drafts = Vec::new();
    for row in rdr.records() {
        let record = row?;
        let line = record.position().map_or(0, |p| p.line());
        let draft: WorkstationDraft = record.deserialize(Some(&headers))?;
        drafts.push((line, draft));
    }

    debug!(rows = drafts.len(), file = %path.display(), "drafts imported");
    Ok(drafts)
}
