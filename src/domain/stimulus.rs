// ============================================================
// Layer 3 — Stimulus Domain Types
// ============================================================
// One stimulus = one sentence/trial tagged with an experimental
// condition. A stimulus passes through three preparation stages,
// and each stage has its own named type:
//
//   RawStimulus      → fresh from the input file
//   IndexedStimulus  → positional indices assigned
//   Stimulus         → sentence tokenized into flagged Words
//
// Why three types instead of one struct with optional fields?
//   The pipeline stages must run exactly once and in order.
//   With one type per stage, running them out of order (or
//   twice) is a compile error, not a runtime surprise.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

use crate::domain::word::Word;

/// A stimulus as read from the input file: a condition label and
/// the untouched sentence text. No indices, no tokens yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStimulus {
    /// Arbitrary condition label — "a", "control", "2b", ...
    /// Not required to be numeric.
    pub condition: String,

    /// The raw sentence text, words-of-interest still marked
    /// with a leading `*`
    pub text: String,
}

impl RawStimulus {
    /// Create a new RawStimulus.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(condition: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            text:      text.into(),
        }
    }
}

/// A stimulus after the indexing pass: it now knows where it sat
/// in the input file, globally and within its own condition.
///
/// Both indices reflect ARRIVAL order in the input file and are
/// never touched again — randomization reorders the sequence, not
/// the indices. This is what lets every output row be traced back
/// to its source line regardless of display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedStimulus {
    pub condition: String,
    pub text: String,

    /// 1-based position in the full input list
    pub global_index: usize,

    /// 1-based position among the stimuli sharing this condition
    pub sentence_index: usize,
}

/// A fully prepared stimulus: indices assigned, sentence split
/// into flagged Words. This is what the randomization engine
/// reorders and the presentation loop consumes, read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stimulus {
    pub condition: String,
    pub global_index: usize,
    pub sentence_index: usize,

    /// The tokenized sentence, in reading order.
    /// May legitimately be empty (a blank-ish line that survived
    /// loading) — an empty stimulus simply produces no records.
    pub words: Vec<Word>,
}

impl Stimulus {
    /// Number of words flagged as words of interest
    pub fn word_of_interest_count(&self) -> usize {
        self.words.iter().filter(|w| w.is_word_of_interest).count()
    }
}
