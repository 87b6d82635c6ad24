// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for one user-level goal each.
//
// Rules for this layer:
//   - No text-processing logic here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Each use case reads top to bottom as a numbered list of steps.

/// Full pipeline: transcripts → vocabulary → batches
pub mod prepare_use_case;

/// Word frequency report only
pub mod stats_use_case;

/// IDs → text with a saved vocabulary
pub mod decode_use_case;
