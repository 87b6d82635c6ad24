// ============================================================
// Layer 3 — Pipeline Errors
// ============================================================
// Every fallible operation in the core returns PrepareResult.
// The application and CLI layers wrap these in anyhow with
// added context; the core never panics on bad input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrepareError {
    /// Caller handed the core something it cannot work with,
    /// e.g. an empty clip collection or a zero batch size.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A word with no encoder entry, and no `_UNK_` to fall back on.
    #[error("word '{0}' is not in the vocabulary and no _UNK_ symbol is reserved")]
    UnknownWord(String),

    #[error("id {0} is not assigned by this decoder")]
    UnknownId(u32),

    #[error("cleaning pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}

pub type PrepareResult<T> = Result<T, PrepareError>;
