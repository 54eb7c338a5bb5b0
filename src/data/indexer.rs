// ============================================================
// Layer 4 — Indexing Pass
// ============================================================
// Assigns two sequence numbers to every stimulus:
//
//   global_index   — 1-based position in the full input list
//   sentence_index — 1-based position among the stimuli that
//                    share its condition
//
// Both reflect ARRIVAL order in the input file. This pass runs
// exactly once, after loading and before tokenization and before
// any shuffling — the whole point of the indices is that the
// output log stays traceable to the source file no matter how
// the presentation order was randomized afterwards.
//
// The per-condition counter is a plain local HashMap scoped to
// this function; first sight of a condition label initializes
// its counter lazily via the entry API. No process-wide state.
//
// Reference: Rust Book §8 (Hash Maps)

use std::collections::HashMap;

use crate::domain::stimulus::{IndexedStimulus, RawStimulus};

/// Walk the stimuli once in input order and attach both indices.
///
/// Pure function of its input: feeding it the same sequence
/// again produces identical indices.
pub fn assign_indices(stimuli: Vec<RawStimulus>) -> Vec<IndexedStimulus> {
    let mut per_condition: HashMap<String, usize> = HashMap::new();

    let indexed: Vec<IndexedStimulus> = stimuli
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            // Increment-and-read the running count for this label
            let count = per_condition.entry(raw.condition.clone()).or_insert(0);
            *count += 1;

            IndexedStimulus {
                condition:      raw.condition,
                text:           raw.text,
                global_index:   i + 1,
                sentence_index: *count,
            }
        })
        .collect();

    tracing::debug!(
        "Indexed {} stimuli across {} conditions",
        indexed.len(),
        per_condition.len()
    );

    indexed
}
