// ============================================================
// transcript_prep — library root
// ============================================================
// Turns raw transcript text into fixed-width batches of token
// IDs for a sequence model:
//
//   raw text → TextCleaner → Tokenizer → FrequencyMap / top-k
//            → Encoder / Decoder → encoded clips → batches
//
// The binary in main.rs is a thin clap front-end over the
// application layer; everything else is usable as a library.

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod infra;

pub use domain::error::{PrepareError, PrepareResult};
