// ============================================================
// Layer 4 — Randomization Engine
// ============================================================
// Reorders the prepared stimulus list for presentation. Exactly
// one policy applies per run:
//
//   None             → original input order
//   Free             → one uniform shuffle, no constraints
//   NoAdjacentRepeat → uniform shuffle, but no two consecutive
//                      stimuli may share a condition
//   Grouped          → same-condition stimuli stay together;
//                      order within each group and the order of
//                      the groups are both shuffled
//
// Every policy returns a NEW sequence and never touches the
// stimuli's indices — after randomization the original input
// order is recoverable only through global_index/sentence_index,
// which is exactly what the output log relies on.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom,
// which is the standard unbiased shuffle algorithm.
//
// Reference: rand crate documentation
//            Jegerski & VanPatten (2014), self-paced reading
//            experiment design

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::stimulus::Stimulus;

/// The presentation-order policy for one run.
///
/// The variants are mutually exclusive by construction — a run
/// carries exactly one of these, selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Randomization {
    /// Present in original input order
    #[default]
    None,
    /// Uniform random permutation, no structural constraint
    Free,
    /// Uniform random permutation with no two consecutive
    /// stimuli sharing a condition
    NoAdjacentRepeat,
    /// Conditions kept contiguous; group order and within-group
    /// order both shuffled
    Grouped,
}

/// Apply the selected policy and return the display order.
pub fn apply(stimuli: Vec<Stimulus>, mode: Randomization) -> Vec<Stimulus> {
    tracing::info!("Randomization mode: {:?}", mode);
    match mode {
        Randomization::None             => stimuli,
        Randomization::Free             => shuffle_free(stimuli),
        Randomization::NoAdjacentRepeat => shuffle_no_adjacent_repeat(stimuli),
        Randomization::Grouped          => shuffle_grouped(stimuli),
    }
}

/// One unconstrained Fisher-Yates shuffle.
pub fn shuffle_free(mut stimuli: Vec<Stimulus>) -> Vec<Stimulus> {
    let mut rng = rand::thread_rng();
    stimuli.shuffle(&mut rng);
    stimuli
}

/// Shuffle until no two consecutive stimuli share a condition
/// (rejection sampling: draw uniform permutations and accept the
/// first one that satisfies the adjacency constraint).
///
/// LIVENESS HAZARD: this loop terminates almost surely whenever a
/// valid arrangement exists, but it spins forever when none does
/// — i.e. when one condition holds more than half the slots,
/// rounded up. There is deliberately no attempt cap and
/// no fallback construction; an infeasible stimulus set is an
/// experiment-design problem, and silently degrading the ordering
/// guarantee would corrupt the design instead of surfacing it.
pub fn shuffle_no_adjacent_repeat(mut stimuli: Vec<Stimulus>) -> Vec<Stimulus> {
    let mut rng = rand::thread_rng();
    loop {
        stimuli.shuffle(&mut rng);
        if !has_adjacent_repeat(&stimuli) {
            return stimuli;
        }
    }
}

/// True iff some stimulus is directly followed by another of the
/// same condition.
fn has_adjacent_repeat(stimuli: &[Stimulus]) -> bool {
    stimuli
        .windows(2)
        .any(|pair| pair[0].condition == pair[1].condition)
}

/// Shuffle while keeping same-condition stimuli contiguous:
/// bucket by condition, shuffle inside each bucket, shuffle the
/// bucket order, then concatenate.
///
/// The two shuffles are independent — within-group order says
/// nothing about group order and vice versa.
pub fn shuffle_grouped(stimuli: Vec<Stimulus>) -> Vec<Stimulus> {
    let mut rng = rand::thread_rng();

    // Bucket by condition label. Insertion order of the map is
    // irrelevant — the label order is shuffled below anyway.
    let mut groups: HashMap<String, Vec<Stimulus>> = HashMap::new();
    for stimulus in stimuli {
        groups
            .entry(stimulus.condition.clone())
            .or_default()
            .push(stimulus);
    }

    // Independent within-group shuffles
    for members in groups.values_mut() {
        members.shuffle(&mut rng);
    }

    // Shuffle the condition labels themselves
    let mut conditions: Vec<String> = groups.keys().cloned().collect();
    conditions.shuffle(&mut rng);

    // Concatenate the groups in shuffled label order
    let mut shuffled = Vec::with_capacity(groups.values().map(Vec::len).sum());
    for condition in conditions {
        shuffled.extend(groups.remove(&condition).unwrap_or_default());
    }
    shuffled
}
