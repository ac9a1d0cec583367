//! Line-based interactive session.
//!
//! Each input line is one command. The draft plays the role of the form,
//! `submit`/`add` commit it and `del` removes a card. Command errors are
//! reported and the loop keeps going; only a failing reader stops it.
//! End of input behaves like `quit`.

use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::models::field::describe_fields;
use crate::models::{Field, WorkstationId};
use crate::ui::card::{render_card, render_session, render_table};
use crate::ui::messages::{error, hint, info, success, warning};
use crate::utils::formatting::pct;
use std::io::{self, BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  set <field> <value>       fill one form field (name, tasks, total, hours, downtime, quality)
  draft                     show the current form values
  clear                     reset the form
  submit                    validate the form and add the workstation
  add                       fill every field step by step, then submit
  del <id>                  delete a workstation
  list                      show every workstation card
  table                     show workstations as a table
  avg                       show the average efficiency
  export [csv|json] <file> [--force]
                            write the session to a file
  help                      show this help
  quit                      end the session";

#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Set(Field, String),
    Draft,
    Clear,
    Submit,
    Add,
    Delete(WorkstationId),
    List,
    Table,
    Average,
    Export {
        format: Option<ExportFormat>,
        file: String,
        force: bool,
    },
    Help,
    Quit,
    Empty,
}

impl ReplCommand {
    pub fn parse(line: &str) -> AppResult<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Ok(ReplCommand::Empty),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((f, v)) => (f, v.trim()),
                    None if !rest.is_empty() => (rest, ""),
                    None => return Err(AppError::Usage("set <field> <value>".into())),
                };
                let field =
                    Field::from_alias(field).ok_or_else(|| AppError::InvalidField(field.into()))?;
                Ok(ReplCommand::Set(field, value.to_string()))
            }
            "draft" | "show" => Ok(ReplCommand::Draft),
            "clear" | "reset" => Ok(ReplCommand::Clear),
            "submit" | "calc" => Ok(ReplCommand::Submit),
            "add" | "new" => Ok(ReplCommand::Add),
            "del" | "delete" | "rm" => {
                if rest.is_empty() {
                    return Err(AppError::Usage("del <id>".into()));
                }
                let id = rest
                    .trim_start_matches('#')
                    .parse::<WorkstationId>()
                    .map_err(|_| AppError::InvalidId(rest.into()))?;
                Ok(ReplCommand::Delete(id))
            }
            "list" | "ls" => Ok(ReplCommand::List),
            "table" => Ok(ReplCommand::Table),
            "avg" | "average" => Ok(ReplCommand::Average),
            "export" => Self::parse_export(rest),
            "help" | "?" => Ok(ReplCommand::Help),
            "quit" | "exit" | "q" => Ok(ReplCommand::Quit),
            other => Err(AppError::UnknownCommand(other.into())),
        }
    }

    fn parse_export(rest: &str) -> AppResult<Self> {
        let mut force = false;
        let mut positional = Vec::new();
        for tok in rest.split_whitespace() {
            match tok {
                "--force" | "-f" => force = true,
                other => positional.push(other),
            }
        }

        match positional.as_slice() {
            [file] => Ok(ReplCommand::Export {
                format: None,
                file: (*file).to_string(),
                force,
            }),
            [fmt, file] => {
                let format = ExportFormat::from_name(fmt)
                    .ok_or_else(|| AppError::InvalidExportFormat((*fmt).to_string()))?;
                Ok(ReplCommand::Export {
                    format: Some(format),
                    file: (*file).to_string(),
                    force,
                })
            }
            _ => Err(AppError::Usage("export [csv|json] <file> [--force]".into())),
        }
    }
}

pub struct Repl<'a, R: BufRead> {
    input: R,
    session: &'a mut Session,
    cfg: &'a Config,
    color: bool,
    interactive: bool,
}

impl<'a, R: BufRead> Repl<'a, R> {
    pub fn new(
        input: R,
        session: &'a mut Session,
        cfg: &'a Config,
        color: bool,
        interactive: bool,
    ) -> Self {
        Self {
            input,
            session,
            cfg,
            color,
            interactive,
        }
    }

    /// Read one line; `None` at end of input.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&self, text: &str) {
        print!("{text}");
        io::stdout().flush().ok();
    }

    pub fn run(&mut self) -> AppResult<()> {
        loop {
            if self.interactive {
                self.prompt(&self.cfg.prompt);
            }

            let Some(line) = self.read_line()? else {
                break;
            };

            let cmd = match ReplCommand::parse(&line) {
                Ok(c) => c,
                Err(e) => {
                    error(e);
                    continue;
                }
            };

            debug!(?cmd, "session command");
            if cmd == ReplCommand::Quit {
                break;
            }

            if let Err(e) = self.execute(cmd) {
                error(e);
            }
        }

        info(format!(
            "Session ended with {} workstation(s).",
            self.session.records().len()
        ));
        Ok(())
    }

    pub fn execute(&mut self, cmd: ReplCommand) -> AppResult<()> {
        match cmd {
            ReplCommand::Set(field, value) => {
                self.session.set_field(field, value);
                Ok(())
            }
            ReplCommand::Draft => {
                self.print_draft();
                Ok(())
            }
            ReplCommand::Clear => {
                self.session.clear_draft();
                info("Form cleared.");
                Ok(())
            }
            ReplCommand::Submit => {
                self.submit();
                Ok(())
            }
            ReplCommand::Add => self.add(),
            ReplCommand::Delete(id) => self.delete(id),
            ReplCommand::List => {
                print!("{}", render_session(self.session, self.color));
                Ok(())
            }
            ReplCommand::Table => {
                if self.session.records().is_empty() {
                    print!("{}", render_session(self.session, self.color));
                } else {
                    print!("{}", render_table(self.session, self.color));
                }
                Ok(())
            }
            ReplCommand::Average => {
                println!(
                    "Average Efficiency: {} across {} workstation(s)",
                    pct(self.session.average_efficiency()),
                    self.session.records().len()
                );
                Ok(())
            }
            ReplCommand::Export {
                format,
                file,
                force,
            } => {
                let format = match format {
                    Some(f) => f,
                    None => ExportFormat::from_name(&self.cfg.default_export_format).ok_or_else(
                        || AppError::InvalidExportFormat(self.cfg.default_export_format.clone()),
                    )?,
                };
                ExportLogic::export(self.session, format, &file, force, &mut self.input)
            }
            ReplCommand::Help => {
                println!("{HELP}");
                Ok(())
            }
            ReplCommand::Quit | ReplCommand::Empty => Ok(()),
        }
    }

    fn print_draft(&self) {
        let draft = self.session.draft();
        for field in Field::ALL {
            let value = draft.get(field);
            let shown = if value.trim().is_empty() { "-" } else { value };
            println!("  {:<22} {}", field.label(), shown);
        }
    }

    /// Commit the draft; a rejection keeps it for correction.
    fn submit(&mut self) {
        let color = self.color;
        match self.session.submit() {
            Ok(record) => {
                success(format!(
                    "Added workstation #{} '{}': {} overall efficiency",
                    record.id(),
                    record.name(),
                    pct(record.metrics().overall_efficiency)
                ));
                print!("{}", render_card(record, color));
            }
            Err(e) => {
                warning(&e);
                if !e.fields().is_empty() {
                    hint(format!("check: {}", describe_fields(e.fields())));
                }
            }
        }
    }

    /// Prompt each field in form order; an empty answer keeps the current value.
    fn add(&mut self) -> AppResult<()> {
        for field in Field::ALL {
            let current = self.session.draft().get(field).to_string();
            if current.is_empty() {
                self.prompt(&format!("{}: ", field.label()));
            } else {
                self.prompt(&format!("{} [{}]: ", field.label(), current));
            }

            let Some(answer) = self.read_line()? else {
                println!();
                warning("Input ended before the form was complete.");
                return Ok(());
            };

            if !self.interactive {
                println!();
            }

            let answer = answer.trim();
            if !answer.is_empty() {
                self.session.set_field(field, answer);
            }
        }

        self.submit();
        Ok(())
    }

    fn delete(&mut self, id: WorkstationId) -> AppResult<()> {
        let Some(name) = self
            .session
            .store()
            .get(id)
            .map(|r| r.name().to_string())
        else {
            info(format!("No workstation #{id}; nothing deleted."));
            return Ok(());
        };

        if self.cfg.confirm_delete {
            warning(format!("Delete workstation #{id} '{name}'?"));
            self.prompt("Confirm [y/N]: ");
            let answer = self.read_line()?.unwrap_or_default();
            if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        self.session.delete(id);
        success(format!("Workstation #{id} '{name}' has been deleted."));
        Ok(())
    }
}
