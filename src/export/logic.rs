use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SessionExport;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::io::BufRead;
use tracing::debug;

/// High-level export of the current session.
pub struct ExportLogic;

impl ExportLogic {
    /// Write every workstation of `session` to `file`.
    ///
    /// An empty session only prints a warning and leaves the filesystem
    /// untouched. `input` answers the overwrite prompt when `force` is off.
    pub fn export(
        session: &Session,
        format: ExportFormat,
        file: &str,
        force: bool,
        input: &mut dyn BufRead,
    ) -> AppResult<()> {
        if session.records().is_empty() {
            warning("No workstations to export.");
            return Ok(());
        }

        let path = expand_tilde(file);
        ensure_writable(&path, force, input)?;

        let doc = SessionExport::from(session);
        debug!(format = format.as_str(), path = %path.display(), rows = doc.count, "export");

        match format {
            ExportFormat::Csv => export_csv(&doc, &path)?,
            ExportFormat::Json => export_json(&doc, &path)?,
        }

        Ok(())
    }
}
