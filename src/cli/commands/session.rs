use crate::cli::repl::Repl;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::header;
use std::io::{self, IsTerminal};

/// Run the interactive session on stdin until `quit` or end of input.
pub fn handle(cfg: &Config, color: bool) -> AppResult<()> {
    let interactive = io::stdin().is_terminal();

    if interactive {
        header("WorkPulse: Workstation Efficiency Calculator");
        println!("Type `help` for the list of commands.\n");
    }

    let mut session = Session::new();
    let stdin = io::stdin();
    let mut repl = Repl::new(stdin.lock(), &mut session, cfg, color, interactive);
    repl.run()
}
