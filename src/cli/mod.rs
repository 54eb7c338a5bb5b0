// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `run`     — runs a session and records reading times
//   2. `preview` — prints the prepared presentation order
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, PreviewArgs, RunArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "spr",
    version = "0.1.0",
    about = "Run a self-paced reading experiment in the terminal and record per-word reading times."
)]
pub struct Cli {
    /// The subcommand to run (run or preview)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Run(args)     => run_experiment(args),
            Commands::Preview(args) => run_preview(args),
        }
    }
}

/// Handles the `run` subcommand.
/// Converts CLI args into a RunConfig and hands off to Layer 2.
fn run_experiment(args: RunArgs) -> Result<()> {
    use crate::application::run_use_case::RunUseCase;

    let output = args.output.clone();

    // Convert CLI args → application config (separates presentation from domain)
    let use_case = RunUseCase::new(args.into());
    use_case.execute()?;

    // The session's only non-record output: where the data went
    println!(
        "End of the experiment. Reading times are saved to '{}'.",
        output.display()
    );
    Ok(())
}

/// Handles the `preview` subcommand.
/// Prepares the stimuli and prints the order summary table.
fn run_preview(args: PreviewArgs) -> Result<()> {
    use crate::application::preview_use_case::PreviewUseCase;

    let use_case = PreviewUseCase::new(args.into());
    let table = use_case.execute()?;
    println!("{table}");
    Ok(())
}
