// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles the cross-cutting I/O concerns that don't belong in
// any specific business layer:
//
//   terminal.rs   — The real display surface and the real
//                   participant. Clears the screen, centers a
//                   word in the terminal, and blocks on ENTER
//                   for acknowledgments.
//
//   record_log.rs — The CSV reading-time log. Creates the output
//                   file, writes the header, and appends one
//                   durable row per word.
//
// Why is this a separate layer?
//   These are the only modules allowed to touch the terminal or
//   the output file. Everything above them talks to the Screen /
//   AckInput / RecordSink traits instead, which is what makes
//   the presentation loop testable without a human at the
//   keyboard.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Terminal rendering and ENTER-key acknowledgments
pub mod terminal;

/// CSV reading-time log with flush-per-row durability
pub mod record_log;
