// ============================================================
// Layer 3 — WordRecord Domain Type
// ============================================================
// One measurement: a single word the participant read, plus
// everything needed to analyse it later without re-reading the
// stimulus file.
//
// Example CSV output (header comes from the serde renames):
//   Condition,IsWordOfInterest,Global Index,Sentence Index,Word Index,Word,RT(s)
//   a,false,1,1,1,The,0.412333
//   a,true,1,1,2,cat,0.601287
//   ...
//
// Global Index / Sentence Index identify the source stimulus in
// ORIGINAL input order, so the log stays traceable no matter
// which randomization mode reordered the presentation.
//
// Reference: Rust Book §5 (Structs), serde field attributes

use serde::{Deserialize, Serialize};

/// One row of the reading-time log.
/// Serialized in field order, so the struct layout IS the CSV
/// column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Condition label of the stimulus this word belongs to
    #[serde(rename = "Condition")]
    pub condition: String,

    /// True iff this word was marked as a measurement target
    #[serde(rename = "IsWordOfInterest")]
    pub is_word_of_interest: bool,

    /// 1-based position of the stimulus in the full input file
    #[serde(rename = "Global Index")]
    pub global_index: usize,

    /// 1-based position of the stimulus within its own condition
    #[serde(rename = "Sentence Index")]
    pub sentence_index: usize,

    /// 1-based position of the word within its sentence.
    /// Resets to 1 at the start of every stimulus, independent of
    /// display order.
    #[serde(rename = "Word Index")]
    pub word_index: usize,

    /// The displayed word (marker already stripped)
    #[serde(rename = "Word")]
    pub word: String,

    /// Reading time in seconds: how long the word was on screen
    /// before the participant acknowledged it. Full precision,
    /// always >= 0 since the end timestamp is taken strictly
    /// after the start timestamp.
    #[serde(rename = "RT(s)")]
    pub reading_time_s: f64,
}
