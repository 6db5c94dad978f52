//! `sandpath completions <SHELL>`: write a completion script to stdout.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "sandpath";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# sandpath completions for {}", self.shell);
        match self.shell {
            Shell::Bash => {
                eprintln!("# Enable with: eval \"$({BIN_NAME} completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("# Save to a directory on $fpath as _{BIN_NAME}");
            }
            Shell::Fish => {
                eprintln!("# Enable with: {BIN_NAME} completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!(
                    "# Enable with: {BIN_NAME} completions powershell | Out-String | Invoke-Expression"
                );
            }
            _ => {}
        }
        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
