// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `run` and `preview`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - value parsing (string → PathBuf, enum variants)
//
// The randomization policy is a single --randomize value enum
// rather than three independent boolean flags, so exactly one
// policy can ever be selected for a run.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::preview_use_case::PreviewConfig;
use crate::application::run_use_case::RunConfig;
use crate::data::randomizer::Randomization;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the experiment and record per-word reading times
    Run(RunArgs),

    /// Show the prepared presentation order without running
    Preview(PreviewArgs),
}

/// All arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the .csv or .txt file with stimuli
    pub input: PathBuf,

    /// Path to the .csv file to save the reading times and
    /// stimulus metadata
    pub output: PathBuf,

    /// Presentation-order randomization policy
    #[arg(long, value_enum, default_value_t = RandomizationArg::None)]
    pub randomize: RandomizationArg,
}

/// All arguments for the `preview` command
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Path to the .csv or .txt file with stimuli
    pub input: PathBuf,

    /// Presentation-order randomization policy to preview
    #[arg(long, value_enum, default_value_t = RandomizationArg::None)]
    pub randomize: RandomizationArg,
}

/// The --randomize values as the command line sees them.
/// clap derives the kebab-case names: none, free,
/// no-adjacent-repeat, grouped.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RandomizationArg {
    /// Present in original input order
    #[default]
    None,
    /// Shuffle with no constraints
    Free,
    /// Shuffle; consecutive same-condition stimuli are avoided
    NoAdjacentRepeat,
    /// Shuffle within conditions and shuffle the condition
    /// order, but keep conditions together
    Grouped,
}

/// Convert the CLI enum into the data-layer policy.
/// This is the boundary between Layer 1 and Layer 4 —
/// the pipeline never sees clap types.
impl From<RandomizationArg> for Randomization {
    fn from(arg: RandomizationArg) -> Self {
        match arg {
            RandomizationArg::None             => Randomization::None,
            RandomizationArg::Free             => Randomization::Free,
            RandomizationArg::NoAdjacentRepeat => Randomization::NoAdjacentRepeat,
            RandomizationArg::Grouped          => Randomization::Grouped,
        }
    }
}

/// Convert CLI RunArgs into the application-layer RunConfig.
impl From<RunArgs> for RunConfig {
    fn from(a: RunArgs) -> Self {
        RunConfig {
            input:         a.input,
            output:        a.output,
            randomization: a.randomize.into(),
        }
    }
}

/// Convert CLI PreviewArgs into the application-layer PreviewConfig.
impl From<PreviewArgs> for PreviewConfig {
    fn from(a: PreviewArgs) -> Self {
        PreviewConfig {
            input:         a.input,
            randomization: a.randomize.into(),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_randomization_arg_maps_one_to_one() {
        assert_eq!(Randomization::from(RandomizationArg::None), Randomization::None);
        assert_eq!(Randomization::from(RandomizationArg::Free), Randomization::Free);
        assert_eq!(
            Randomization::from(RandomizationArg::NoAdjacentRepeat),
            Randomization::NoAdjacentRepeat
        );
        assert_eq!(Randomization::from(RandomizationArg::Grouped), Randomization::Grouped);
    }

    #[test]
    fn test_run_args_convert_to_config() {
        let args = RunArgs {
            input:     PathBuf::from("stimuli.csv"),
            output:    PathBuf::from("results.csv"),
            randomize: RandomizationArg::Grouped,
        };
        let config: RunConfig = args.into();
        assert_eq!(config.input, PathBuf::from("stimuli.csv"));
        assert_eq!(config.randomization, Randomization::Grouped);
    }
}
