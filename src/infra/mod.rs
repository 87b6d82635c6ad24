// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File-backed pieces that several use cases share:
//
//   vocab_store.rs      — vocabulary.json: the ordered word list
//                         an encoder is rebuilt from. Reused when
//                         built with the same top_k and has_unknown.
//
//   artifact_store.rs   — prepare_config.json and batches.json
//
//   frequency_report.rs — word_frequency.csv of the top-k words
//                         for charts and reports.
//
// The core in Layer 4 never touches the filesystem except the
// loader; everything persisted goes through here.
//
// Why is this a separate layer?
//   The encoder, batcher and tokenizer can then be tested with
//   plain vectors, and the file formats can change without
//   touching them.
//
// Reference: Rust Book §7 (Modules)

/// Vocabulary record saving and loading
pub mod vocab_store;

/// Config and batch output
pub mod artifact_store;

/// Top-k word frequency CSV
pub mod frequency_report;
