// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that name the concepts of the pipeline:
// transcripts, sentences, clips and the reserved control
// symbols that frame them.
//
// Rules for this layer:
//   - NO burn types
//   - NO file I/O
//   - NO regex or text-processing logic
//
// The data layer (Layer 4) does the work; this layer only
// says what the pieces ARE.

/// A raw transcript loaded from disk
pub mod document;

/// Sentence and clip token sequences
pub mod clip;

/// The reserved control symbols and their fixed ID layout
pub mod symbols;

/// Library error type
pub mod error;

/// Core abstractions other layers implement
pub mod traits;
