// ============================================================
// Layer 4 — Tokenization & Flagging Pass
// ============================================================
// Splits every stimulus sentence into words and turns the `*`
// markers into word-of-interest flags.
//
// Tokenization is intentionally naive: split on runs of
// whitespace, nothing else. Punctuation stays attached to its
// word ("mat." is one token), which is exactly what a self-paced
// reading display wants — the participant sees the sentence's
// own punctuation.
//
// Marker handling:
//   "*cat"   → text "cat",  flagged
//   "**cat"  → text "cat",  flagged (all LEADING stars stripped)
//   "cat*"   → text "cat*", not flagged (trailing star survives)
//   "c*at"   → text "c*at", not flagged
//
// The pass is pure (no I/O) and designed to run exactly once;
// re-running on already-stripped words would be a no-op anyway
// since no leading `*` remains.
//
// Reference: Rust Book §8 (Strings and Slices)

use crate::domain::stimulus::{IndexedStimulus, Stimulus};
use crate::domain::word::Word;

/// Tokenize and flag every stimulus in order.
pub fn tokenize_all(stimuli: Vec<IndexedStimulus>) -> Vec<Stimulus> {
    stimuli.into_iter().map(tokenize_one).collect()
}

/// Tokenize a single stimulus: the sentence text becomes a
/// sequence of flagged Words; indices carry over untouched.
///
/// A sentence with no tokens (possible for e.g. a tabular row
/// whose sentence column is empty) yields an empty word list —
/// legal, and simply produces no output rows downstream.
pub fn tokenize_one(stimulus: IndexedStimulus) -> Stimulus {
    let words = stimulus.text.split_whitespace().map(flag_token).collect();

    Stimulus {
        condition:      stimulus.condition,
        global_index:   stimulus.global_index,
        sentence_index: stimulus.sentence_index,
        words,
    }
}

/// Strip the leading `*` markers from one raw token and record
/// whether any were present.
fn flag_token(raw: &str) -> Word {
    Word {
        text: raw.trim_start_matches('*').to_string(),
        is_word_of_interest: raw.starts_with('*'),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn indexed(text: &str) -> IndexedStimulus {
        IndexedStimulus {
            condition:      "a".to_string(),
            text:           text.to_string(),
            global_index:   1,
            sentence_index: 1,
        }
    }

    #[test]
    fn test_splits_on_whitespace_runs() {
        let stimulus = tokenize_one(indexed("The  cat\tsat"));
        let texts: Vec<&str> = stimulus.words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["The", "cat", "sat"]);
    }

    #[test]
    fn test_marked_word_is_flagged() {
        let stimulus = tokenize_one(indexed("The *cat* sat"));
        let texts: Vec<&str> = stimulus.words.iter().map(|w| w.text.as_str()).collect();
        let flags: Vec<bool> = stimulus.words.iter().map(|w| w.is_word_of_interest).collect();
        // Only the LEADING star strips; the trailing one survives
        assert_eq!(texts, vec!["The", "cat*", "sat"]);
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn test_all_leading_stars_stripped() {
        let stimulus = tokenize_one(indexed("**cat"));
        assert_eq!(stimulus.words[0], Word::new("cat", true));
    }

    #[test]
    fn test_trailing_star_not_a_marker() {
        let stimulus = tokenize_one(indexed("cat*"));
        assert_eq!(stimulus.words[0], Word::new("cat*", false));
    }

    #[test]
    fn test_interior_star_not_a_marker() {
        let stimulus = tokenize_one(indexed("c*at"));
        assert_eq!(stimulus.words[0], Word::new("c*at", false));
    }

    #[test]
    fn test_punctuation_rides_along() {
        let stimulus = tokenize_one(indexed("Stop, *now."));
        assert_eq!(stimulus.words[0], Word::new("Stop,", false));
        assert_eq!(stimulus.words[1], Word::new("now.", true));
    }

    #[test]
    fn test_empty_sentence_yields_no_words() {
        // Legal boundary case — must not panic, just no words
        let stimulus = tokenize_one(indexed(""));
        assert!(stimulus.words.is_empty());
    }

    #[test]
    fn test_indices_carry_over() {
        let mut input = indexed("one two");
        input.global_index = 7;
        input.sentence_index = 3;
        let stimulus = tokenize_one(input);
        assert_eq!(stimulus.global_index, 7);
        assert_eq!(stimulus.sentence_index, 3);
    }
}
