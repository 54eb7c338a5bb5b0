// ============================================================
// Layer 3 — Word Domain Type
// ============================================================
// One token of a tokenized stimulus sentence.
//
// In the input file, words of interest (the measurement targets,
// as opposed to filler words) are marked with a leading `*`:
//
//   "The *cat sat on the mat"  →  "cat" is the word of interest
//
// By the time a Word exists, the marker has been stripped and
// replaced by the boolean flag — the participant must never see
// the asterisk on screen.

use serde::{Deserialize, Serialize};

/// A single displayable token with its measurement flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// The token text with any leading `*` markers stripped.
    /// Interior punctuation is kept as-is ("mat." stays "mat.").
    pub text: String,

    /// True iff the raw token began with `*`
    pub is_word_of_interest: bool,
}

impl Word {
    /// Create a new Word
    pub fn new(text: impl Into<String>, is_word_of_interest: bool) -> Self {
        Self {
            text: text.into(),
            is_word_of_interest,
        }
    }
}
