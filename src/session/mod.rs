// ============================================================
// Layer 5 — Session Layer
// ============================================================
// The interactive part of the system: the loop that actually
// sits with the participant, shows one word at a time, and
// measures how long each word stays on screen.
//
// Everything here is strictly single-threaded and blocking —
// the process does nothing while it waits for the participant,
// and that is the point: the wait IS the measurement.

/// Drives the per-word display/measure/record cycle
pub mod presenter;
