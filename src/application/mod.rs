// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (running a session or previewing the order).
//
// Rules for this layer:
//   - No parsing, shuffling, or timing logic here
//   - No UI or printing here (that's Layer 1)
//   - No direct terminal/file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The interactive experiment workflow
pub mod run_use_case;

// The non-interactive order-check workflow
pub mod preview_use_case;
