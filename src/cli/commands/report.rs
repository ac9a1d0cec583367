use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::read_drafts;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::models::field::describe_fields;
use crate::ui::card::{render_banner, render_session, render_table};
use crate::ui::messages::{hint, info, warning};
use crate::utils::path::expand_tilde;
use std::io;

/// Replay a CSV of drafts through the session and print the result.
pub fn handle(cmd: &Commands, cfg: &Config, color: bool) -> AppResult<()> {
    if let Commands::Report {
        input,
        format,
        out,
        force,
        table,
    } = cmd
    {
        let drafts = read_drafts(&expand_tilde(input))?;
        let mut session = Session::new();

        let mut rejected = 0usize;
        for (row, draft) in drafts {
            session.load_draft(draft);

            if let Err(e) = session.submit() {
                rejected += 1;
                warning(format!("Row {row} skipped: {e}"));
                if !e.fields().is_empty() {
                    hint(format!("check: {}", describe_fields(e.fields())));
                }
            }
        }

        if rejected > 0 {
            info(format!(
                "{} row(s) accepted, {} rejected.",
                session.records().len(),
                rejected
            ));
        }

        if *table && !session.records().is_empty() {
            if let Some(banner) = render_banner(&session, color) {
                println!("{banner}");
            }
            print!("{}", render_table(&session, color));
        } else {
            print!("{}", render_session(&session, color));
        }

        if let Some(file) = out {
            let fmt = match format {
                Some(f) => *f,
                None => ExportFormat::from_name(&cfg.default_export_format).ok_or_else(|| {
                    AppError::InvalidExportFormat(cfg.default_export_format.clone())
                })?,
            };
            let stdin = io::stdin();
            ExportLogic::export(&session, fmt, file, *force, &mut stdin.lock())?;
        }
    }

    Ok(())
}
