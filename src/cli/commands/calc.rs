use crate::cli::parser::Commands;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::WorkstationExport;
use crate::models::WorkstationDraft;
use crate::models::field::describe_fields;
use crate::ui::card::render_card;
use crate::ui::messages::hint;

/// Validate and compute a single workstation given on the command line.
pub fn handle(cmd: &Commands, color: bool) -> AppResult<()> {
    if let Commands::Calc {
        name,
        tasks_completed,
        total_tasks,
        hours_worked,
        downtime,
        quality_score,
        json,
    } = cmd
    {
        let value = |v: &Option<String>| v.clone().unwrap_or_default();

        let draft = WorkstationDraft::new(
            value(name),
            value(tasks_completed),
            value(total_tasks),
            value(hours_worked),
            value(downtime),
            value(quality_score),
        );

        // A throwaway session runs the same submit path as the interactive one.
        let mut session = Session::new();
        session.load_draft(draft);

        let record = match session.submit() {
            Ok(r) => r,
            Err(e) => {
                if !e.fields().is_empty() {
                    hint(format!("check: {}", describe_fields(e.fields())));
                }
                return Err(e.into());
            }
        };

        if *json {
            let row = WorkstationExport::from(record);
            println!("{}", serde_json::to_string_pretty(&row)?);
        } else {
            print!("{}", render_card(record, color));
        }
    }

    Ok(())
}
