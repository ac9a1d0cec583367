use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let nothing_requested = !(*print_config || *check || *migrate || *edit_config);

        if *print_config || nothing_requested {
            ConfigLogic::print(cfg, path)?;
        }

        if *check {
            ConfigLogic::check(cfg, path)?;
        }

        if *migrate {
            ConfigLogic::migrate(path)?;
        }

        if *edit_config {
            ConfigLogic::edit(path, editor)?;
        }
    }

    Ok(())
}
