// ============================================================
// Layer 3 — Core Traits
// ============================================================
// The core only ever sees a sequence of plain-text transcripts.
// Where they come from (a directory of .txt files, an XML dump,
// an HTTP download) is the business of whoever implements
// ClipSource.

use anyhow::Result;

use crate::domain::document::Transcript;

// ─── ClipSource ───────────────────────────────────────────────────────────────
/// Any component that can supply raw transcripts, one per clip.
///
/// Implementations:
///   - TextClipLoader → one clip per .txt file in a directory
pub trait ClipSource {
    /// Load every available transcript, in a stable order.
    fn load_all(&self) -> Result<Vec<Transcript>>;
}
