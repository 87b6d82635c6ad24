// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from raw transcript text to tensor batches.
//
//   .txt transcripts
//       │
//       ▼
//   TextClipLoader    → one raw Transcript per file
//       │
//       ▼
//   TextCleaner       → lowercase, punctuation, annotations, speakers
//       │
//       ▼
//   Tokenizer         → sentences of words, wrapped into a Clip
//       │
//       ▼
//   FrequencyMap      → counts, top-k ranked words
//       │
//       ▼
//   Encoder/Decoder   → word ↔ integer ID, reserved symbols
//       │
//       ▼
//   SequenceBatcher   → padded, truncated, interleaved chunks
//       │
//       ▼
//   ChunkDataset      → burn Dataset over the chunks
//       │
//       ▼
//   ChunkBatcher      → burn Batcher stacking chunks into tensors
//
// Each module does exactly one step and is tested on its own.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Loads .txt transcripts from a directory
pub mod loader;

/// Ordered string-rewrite steps applied to each paragraph
pub mod cleaner;

/// Sentence and word splitting, clip wrapping
pub mod tokenizer;

/// Word frequency counting and top-k ranking
pub mod vocabulary;

/// Symbol ↔ ID mapping with the reserved-symbol layout
pub mod encoder;

/// Pads/truncates encoded clips into fixed-width batches
pub mod batcher;

/// Implements burn's Dataset trait over batched chunks
pub mod dataset;

/// Shuffles, samples and splits clip collections
pub mod splitter;
