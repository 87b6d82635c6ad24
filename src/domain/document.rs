// ============================================================
// Layer 3 — Transcript Domain Type
// ============================================================
// One raw transcript as handed to the core: a source name for
// traceability and the untouched text. Every cleaning step
// produces a new String; the transcript itself is never
// mutated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// File name or other identifier of where the text came from
    pub source: String,

    /// Full raw text, paragraphs separated by '\n'
    pub text: String,
}

impl Transcript {
    /// Example:
    ///   let t = Transcript::new("talk_0001.txt", "Thank you. (Applause)");
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }
}
