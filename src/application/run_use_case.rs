// ============================================================
// Layer 2 — RunUseCase
// ============================================================
// Orchestrates one full experiment session in order:
//
//   Step 1: Load stimuli from file      (Layer 4 - data)
//   Step 2: Assign indices              (Layer 4 - data)
//   Step 3: Tokenize + flag words       (Layer 4 - data)
//   Step 4: Randomize display order     (Layer 4 - data)
//   Step 5: Open the record log         (Layer 6 - infra)
//   Step 6: Run the timed session       (Layer 5 - session)
//
// The order of steps 2-4 is load-bearing: indices must be
// assigned before any shuffle, or the output log loses its link
// to the input file.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    indexer::assign_indices,
    loader::StimulusFile,
    randomizer::{self, Randomization},
    tokenizer::tokenize_all,
};
use crate::domain::traits::StimulusSource;
use crate::infra::{
    record_log::RecordLog,
    terminal::{StdinAck, TerminalScreen},
};
use crate::session::presenter::run_session;

// ─── Run Configuration ────────────────────────────────────────────────────────
// Everything one session needs. Serialisable like the rest of
// the configs in this codebase, though nothing persists it today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Path to the .csv or .txt stimulus file
    pub input: PathBuf,

    /// Path of the CSV file to write reading times to
    pub output: PathBuf,

    /// Presentation-order policy for this session
    pub randomization: Randomization,
}

// ─── RunUseCase ───────────────────────────────────────────────────────────────
// Owns the config and runs the full session pipeline.
pub struct RunUseCase {
    config: RunConfig,
}

impl RunUseCase {
    /// Create a new RunUseCase with the given configuration
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Execute the full session end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // ── Step 1: Load stimuli ──────────────────────────────────────────────
        tracing::info!("Loading stimuli from '{}'", cfg.input.display());
        let source = StimulusFile::new(&cfg.input);
        let raw = source.load_all()?;

        // ── Step 2: Assign indices — strictly before any shuffle ──────────────
        let indexed = assign_indices(raw);

        // ── Step 3: Tokenize and extract word-of-interest flags ───────────────
        let stimuli = tokenize_all(indexed);
        let word_count: usize = stimuli.iter().map(|s| s.words.len()).sum();
        tracing::info!("Prepared {} stimuli ({} words)", stimuli.len(), word_count);

        // ── Step 4: Randomize the display order ───────────────────────────────
        let ordered = randomizer::apply(stimuli, cfg.randomization);

        // ── Step 5: Open the record log before anyone sits down ───────────────
        // Output problems must surface now, not after the
        // participant has read half the stimuli
        let mut sink = RecordLog::create(&cfg.output)?;

        // ── Step 6: Run the timed presentation loop ───────────────────────────
        let mut screen = TerminalScreen::new();
        let mut input = StdinAck;
        run_session(&ordered, &mut screen, &mut input, &mut sink)
    }
}
