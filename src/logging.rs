//! Diagnostic logging setup.
//!
//! User-facing output goes through `ui::messages`; `tracing` events are for
//! troubleshooting and are written to stderr so they never mix with reports.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides every other level setting.
pub const LOG_ENV: &str = "WORKPULSE_LOG";

/// Install the global subscriber. Level precedence: `WORKPULSE_LOG`, then the
/// `--log-level` flag, then the config file. Safe to call more than once.
pub fn init_tracing(cli_level: Option<&str>, config_level: &str, ansi: bool) {
    let base_level = cli_level.unwrap_or(config_level);

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("workpulse={base_level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}
