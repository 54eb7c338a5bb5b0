// ============================================================
// Layer 2 — Preview Use Case
// ============================================================
// Dry run for the experimenter: prepares and orders the stimuli
// exactly as a real session would, then renders a summary table
// instead of presenting anything. Useful for checking a stimulus
// file (and eyeballing a randomization policy) before a
// participant sits down.
//
// Shares every pipeline stage with RunUseCase — only the final
// consumer differs, and nothing here touches the terminal
// directly: the table comes back as a string for Layer 1 to
// print.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::data::{
    indexer::assign_indices,
    loader::StimulusFile,
    randomizer::{self, Randomization},
    tokenizer::tokenize_all,
};
use crate::domain::traits::StimulusSource;

/// Configuration for one preview: like a RunConfig without an
/// output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Path to the .csv or .txt stimulus file
    pub input: PathBuf,

    /// Presentation-order policy to preview
    pub randomization: Randomization,
}

pub struct PreviewUseCase {
    config: PreviewConfig,
}

impl PreviewUseCase {
    pub fn new(config: PreviewConfig) -> Self {
        Self { config }
    }

    /// Prepare the stimuli and return the order summary table.
    pub fn execute(&self) -> Result<String> {
        let cfg = &self.config;

        let raw = StimulusFile::new(&cfg.input).load_all()?;
        let stimuli = tokenize_all(assign_indices(raw));
        let ordered = randomizer::apply(stimuli, cfg.randomization);

        // One line per stimulus, in display order. "WoI" counts
        // the words flagged as words of interest.
        let mut table = String::new();
        writeln!(
            table,
            "{:>4}  {:>6}  {:>4}  {:<12}  {:>5}  {:>3}",
            "Pos", "Global", "Sent", "Condition", "Words", "WoI"
        )?;
        for (pos, stimulus) in ordered.iter().enumerate() {
            writeln!(
                table,
                "{:>4}  {:>6}  {:>4}  {:<12}  {:>5}  {:>3}",
                pos + 1,
                stimulus.global_index,
                stimulus.sentence_index,
                stimulus.condition,
                stimulus.words.len(),
                stimulus.word_of_interest_count(),
            )?;
        }
        writeln!(table, "{} stimuli total", ordered.len())?;

        Ok(table)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_preview_lists_stimuli_in_display_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stimuli.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "a,The *cat sat").unwrap();
        writeln!(f, "b,Dogs bark loudly today").unwrap();

        let use_case = PreviewUseCase::new(PreviewConfig {
            input:         path,
            randomization: Randomization::None,
        });
        let table = use_case.execute().unwrap();

        let lines: Vec<&str> = table.lines().collect();
        // Header + 2 stimuli + total line
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Condition"));
        // Mode None: display position 1 is global index 1
        assert!(lines[1].trim_start().starts_with('1'));
        assert!(lines[1].contains('a'));
        assert!(lines[2].contains('b'));
        assert!(lines[3].contains("2 stimuli"));
    }

    #[test]
    fn test_preview_counts_words_and_targets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stimuli.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "a,The *cat sat").unwrap();

        let use_case = PreviewUseCase::new(PreviewConfig {
            input:         path,
            randomization: Randomization::None,
        });
        let table = use_case.execute().unwrap();

        // 3 words, 1 of them a word of interest
        assert!(table.lines().nth(1).unwrap().ends_with("3    1"));
    }
}
