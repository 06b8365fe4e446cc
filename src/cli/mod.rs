//! CLI commands and argument handling.
//!
//! This module contains the clap CLI definitions, the command
//! implementations, and the mapping from command results to process exit
//! codes.

use std::io;
use std::process::ExitCode;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::questioner::{AnswerSource, AskError, Questioner};

/// Interactive yes/no prompts for the terminal.
///
/// Prints a question, reads one answer line, and re-asks until it sees a
/// recognised yes/no answer.
#[derive(Parser, Debug)]
#[command(name = "questioner")]
#[command(author, version = crate::VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run; quick-start help is shown when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands for questioner.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a yes/no question.
    ///
    /// Recognised answers (case-insensitive): y, yes, n, no. Anything else
    /// prints a diagnostic and asks again. Exits 0 on yes and 1 on no, so
    /// it can gate shell scripts:
    ///   questioner ask "Deploy to production?" && ./deploy.sh
    Ask(AskCommand),

    /// Ask "Are you happy?" and print the verdict.
    Happiness(HappinessCommand),

    /// Generate shell completions.
    Completions(CompletionsCommand),
}

/// Result type for command execution.
pub type CliResult = Result<ExitCode, CliError>;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The interactive exchange failed before an answer was recognised.
    #[error(transparent)]
    Ask(#[from] AskError),
}

/// Arguments for `questioner ask`.
#[derive(Args, Debug)]
pub struct AskCommand {
    /// Question text, printed verbatim as a single line.
    pub question: String,
}

impl AskCommand {
    /// Ask the question on the standard streams.
    ///
    /// The answer becomes the exit code: 0 for yes, 1 for no. Exhausted
    /// input surfaces as an error and exits 2 via [`handle_result`].
    pub fn execute(&self) -> CliResult {
        let answered_yes = Questioner::from_stdio().ask(&self.question)?;
        Ok(if answered_yes {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        })
    }
}

/// Arguments for `questioner happiness`.
#[derive(Args, Debug)]
pub struct HappinessCommand {}

impl HappinessCommand {
    /// Run the happiness inquiry and print the verdict line.
    pub fn execute(&self) -> CliResult {
        let verdict = Questioner::from_stdio().inquire_about_happiness()?;
        println!("{verdict}");
        Ok(ExitCode::SUCCESS)
    }
}

/// Arguments for `questioner completions`.
#[derive(Args, Debug)]
pub struct CompletionsCommand {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Write a completion script for the chosen shell to stdout.
    pub fn execute(&self) -> CliResult {
        let mut cmd = Cli::command();
        clap_complete::generate(self.shell, &mut cmd, "questioner", &mut io::stdout());
        Ok(ExitCode::SUCCESS)
    }
}

/// Convert a command result into a process exit code.
///
/// Errors are reported on stderr and map to exit code 2, keeping the 0/1
/// yes/no codes unambiguous for scripts.
pub fn handle_result(result: CliResult) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {e}");
            ExitCode::from(2)
        }
    }
}
