use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for WorkPulse
/// Workstation efficiency calculator for the terminal
#[derive(Parser)]
#[command(
    name = "workpulse",
    version = env!("CARGO_PKG_VERSION"),
    about = "Workstation efficiency calculator: enter production metrics per workstation and compare efficiency",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Diagnostic log level (error, warn, info, debug, trace)
    #[arg(global = true, long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Disable coloured output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or invalid fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start an interactive session (workstations live until you quit)
    Session,

    /// Compute the metrics of a single workstation
    Calc {
        #[arg(long, help = "Workstation name")]
        name: Option<String>,

        #[arg(long = "tasks-completed", help = "Tasks completed (>= 0)")]
        tasks_completed: Option<String>,

        #[arg(long = "total-tasks", help = "Total tasks assigned (> 0)")]
        total_tasks: Option<String>,

        #[arg(long = "hours-worked", help = "Hours worked (> 0)")]
        hours_worked: Option<String>,

        #[arg(long, help = "Downtime in hours (0 ..= hours worked)")]
        downtime: Option<String>,

        #[arg(long = "quality-score", help = "Quality score (0-100)")]
        quality_score: Option<String>,

        #[arg(long, help = "Print the metrics as JSON instead of a card")]
        json: bool,
    },

    /// Load workstations from a CSV file and print the session report
    Report {
        /// CSV file with columns name,tasks_completed,total_tasks,hours_worked,downtime,quality_score
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        #[arg(long, value_enum, help = "Export format (default from config)")]
        format: Option<ExportFormat>,

        #[arg(long, short = 'o', value_name = "FILE", help = "Export the report to FILE")]
        out: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the export file without asking")]
        force: bool,

        #[arg(long, help = "Show a compact table instead of cards")]
        table: bool,
    },
}
