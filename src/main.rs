//! questioner - interactive yes/no prompts for the terminal.
//!
//! This is the main entry point for the questioner CLI tool.

use clap::Parser;
use questioner::cli::{handle_result, Cli, CliResult, Commands};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let result: CliResult = match cli.command {
        None => {
            // No subcommand provided - show help
            println!("questioner - interactive yes/no prompts for the terminal.");
            println!();
            println!("Run 'questioner --help' for available commands.");
            println!();
            println!("Quick start:");
            println!("  questioner ask \"Deploy to production?\"   # exit 0 on yes, 1 on no");
            println!("  questioner happiness                       # the happiness inquiry");
            Ok(std::process::ExitCode::SUCCESS)
        }
        Some(cmd) => match cmd {
            Commands::Ask(c) => c.execute(),
            Commands::Happiness(c) => c.execute(),
            Commands::Completions(c) => c.execute(),
        },
    };

    handle_result(result)
}
