// ============================================================
// Layer 4 — Stimulus Loader
// ============================================================
// Loads raw stimuli from one of two file formats, chosen by
// file extension:
//
//   .csv  → tabular: one record per line, two columns
//           (condition, sentence), no header row
//   .txt  → plain text: one sentence per line; the condition is
//           synthesized as the line's 1-based position among the
//           nonblank lines ("1", "2", ...), so every sentence is
//           effectively its own condition
//
// Both formats skip blank (whitespace-only) lines entirely
// BEFORE parsing — a blank line is not a record and is not
// counted when synthesizing plain-text conditions.
//
// Parsing is strict: a tabular record with the wrong number of
// columns is a fatal error, and an unrecognized extension is
// rejected before the file is even opened. There is no partial
// recovery — a bad stimulus file aborts the run.
//
// Reference: Rust Book §9 (Error Handling)
//            csv crate documentation (tuple deserialization)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use thiserror::Error;

use crate::domain::stimulus::RawStimulus;
use crate::domain::traits::StimulusSource;

/// Errors a caller may want to match on, as opposed to the
/// anyhow chains used for plain I/O failures.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input path has neither a .csv nor a .txt extension.
    /// Raised before any file I/O happens.
    #[error("unsupported stimulus file format: '{0}' (expected .csv or .txt)")]
    UnsupportedFormat(PathBuf),
}

/// A stimulus file on disk. Implements the StimulusSource trait
/// so the application layer never sees paths or parsing details.
pub struct StimulusFile {
    /// Path to the .csv or .txt stimulus file
    path: PathBuf,
}

impl StimulusFile {
    /// Create a new StimulusFile pointed at a path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StimulusSource for StimulusFile {
    fn load_all(&self) -> Result<Vec<RawStimulus>> {
        // Extension dispatch happens first: an unsupported path
        // must fail before any processing begins.
        // The match is exact and lowercase — `stimuli.CSV` is
        // rejected, same as the strict suffix check it replaces.
        let parse: fn(&str) -> Result<Vec<RawStimulus>> =
            match self.path.extension().and_then(|e| e.to_str()) {
                Some("csv") => parse_tabular,
                Some("txt") => parse_plain,
                _ => return Err(LoadError::UnsupportedFormat(self.path.clone()).into()),
            };

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read stimulus file '{}'", self.path.display()))?;

        let stimuli = parse(&content)
            .with_context(|| format!("failed to parse stimulus file '{}'", self.path.display()))?;

        tracing::info!(
            "Loaded {} stimuli from '{}'",
            stimuli.len(),
            self.path.display()
        );
        Ok(stimuli)
    }
}

/// Keep only the lines that contain something other than
/// whitespace, preserving their relative order.
fn nonblank_lines(content: &str) -> Vec<&str> {
    content.lines().filter(|l| !l.trim().is_empty()).collect()
}

/// Parse tabular content: one CSV record per nonblank line,
/// exactly two columns (condition, sentence), no header row.
///
/// Quoted fields are honored, so a sentence containing commas
/// can be written as `a,"The cat, asleep, stirred"`.
pub fn parse_tabular(content: &str) -> Result<Vec<RawStimulus>> {
    // Blank lines are dropped before the CSV parser ever sees
    // the data — they are not records, not even empty ones.
    let filtered = nonblank_lines(content).join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(filtered.as_bytes());

    let mut stimuli = Vec::new();
    for (row, result) in reader.deserialize::<(String, String)>().enumerate() {
        // Tuple deserialization enforces the column count:
        // a one- or three-column record is a hard error here.
        let (condition, sentence) =
            result.with_context(|| format!("malformed stimulus row {}", row + 1))?;
        stimuli.push(RawStimulus::new(condition, sentence));
    }
    Ok(stimuli)
}

/// Parse plain-text content: one sentence per nonblank line,
/// condition synthesized as the 1-based line number among the
/// nonblank lines, converted to a string.
pub fn parse_plain(content: &str) -> Result<Vec<RawStimulus>> {
    Ok(nonblank_lines(content)
        .iter()
        .enumerate()
        .map(|(i, line)| RawStimulus::new((i + 1).to_string(), line.trim()))
        .collect())
}
