// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - StimulusFile implements StimulusSource
//   - A scripted test double also implements AckInput
//   - The presentation loop only sees the traits and runs
//     identically against a terminal or a test harness
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;

use crate::domain::record::WordRecord;
use crate::domain::stimulus::RawStimulus;

// ─── StimulusSource ───────────────────────────────────────────────────────────
/// Any component that can produce raw stimuli for an experiment.
///
/// Implementations:
///   - StimulusFile → loads from a .csv or .txt file
///   - (tests) in-memory fixture sources
pub trait StimulusSource {
    /// Load all stimuli, preserving the order of the source.
    fn load_all(&self) -> Result<Vec<RawStimulus>>;
}

// ─── Screen ───────────────────────────────────────────────────────────────────
/// The display surface the participant looks at.
///
/// Implementations:
///   - TerminalScreen → crossterm-backed real terminal
///   - (tests) a silent screen that records what was shown
pub trait Screen {
    /// Wipe the screen and move the cursor home
    fn clear(&mut self) -> Result<()>;

    /// Show one word centered on the screen
    fn show_centered(&mut self, text: &str) -> Result<()>;

    /// Show an instruction line at the normal cursor position
    /// (used for the ready prompt, not for stimuli)
    fn show_prompt(&mut self, text: &str) -> Result<()>;
}

// ─── AckInput ─────────────────────────────────────────────────────────────────
/// The participant's acknowledgment channel. One call blocks
/// until the participant signals "next" — the content of the
/// signal is deliberately ignored.
///
/// Implementations:
///   - StdinAck → one ENTER press per acknowledgment
///   - (tests) a scripted sequence of instant acknowledgments
pub trait AckInput {
    /// Block until the participant acknowledges.
    fn wait_for_ack(&mut self) -> Result<()>;
}

// ─── RecordSink ───────────────────────────────────────────────────────────────
/// Where finished measurements go, one row at a time.
///
/// The contract requires durability per row: after append()
/// returns, that record must survive a process kill. An aborted
/// session keeps everything already acknowledged.
///
/// Implementations:
///   - RecordLog → CSV file, flushed after every row
///   - (tests) an in-memory Vec of records
pub trait RecordSink {
    /// Append one record in display order.
    fn append(&mut self, record: &WordRecord) -> Result<()>;
}
