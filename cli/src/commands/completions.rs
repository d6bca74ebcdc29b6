//! `authwindow completions <shell>`.

use std::io::Write as _;

use clap::CommandFactory as _;
use clap_complete::Shell;

use crate::cli::Cli;

/// Writes the completion script for `shell` to stdout.
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_owned();
    let mut stdout = std::io::stdout();
    clap_complete::generate(shell, &mut cmd, bin_name, &mut stdout);
    stdout.flush().ok();
}
