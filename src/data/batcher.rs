// ============================================================
// Layer 4 — Sequence Batcher
// ============================================================
// Turns variable-length encoded clips into fixed-width chunks
// for a stateful sequence model.
//
// How batching works:
//   longest      = length of the longest clip
//   num_truncate = longest / truncate_length + 1
//   full_length  = num_truncate * truncate_length
//
//   The +1 means even the longest clip ends with at least one
//   chunk's worth of padding slots after its real tokens
//   (a whole extra block when it divides evenly).
//
//   1. Right-pad every clip with _PAD_ (0) to full_length
//   2. Take clips batch_size at a time, in source order
//   3. Emit, per batch:   for slot in 0..num_truncate
//                           for clip in batch
//                             clip[slot*T .. (slot+1)*T]
//
// Example, batch_size=2, truncate_length=2, clips A=[1,2,3] B=[4]:
//   padded  A=[1,2,3,0]  B=[4,0,0,0]
//   output  [1,2] [4,0] [3,0] [0,0]
//
// Why interleave instead of emitting each clip whole?
//   A stateful model reads batch_size rows in parallel and keeps
//   one hidden state per row. Row i of consecutive batch_size-row
//   groups is always the same clip, so the state left after slot
//   k is exactly what slot k+1 of that clip needs. Do NOT shuffle
//   the output.
//
// Why pad every clip to the longest one?
//   All batches then have the same num_truncate slots, so the
//   model can reset its state at a fixed period.
//
// Why drop the tail clips?
//   LOSSY: clips that do not fill a final complete batch are
//   dropped. A short last batch would leave rows with no clip to
//   carry state for, and padding them with empty clips would
//   train on pure _PAD_ rows. The count is reported in
//   PaddedBatches::dropped_clips and logged at warn level.
//
// Reference: Burn Book §4 (Batcher)
//            Rust Book §8 (Vectors)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
    tensor::TensorData,
};
use serde::{Deserialize, Serialize};

use crate::data::dataset::TokenChunk;
use crate::domain::error::{PrepareError, PrepareResult};

/// ID used to pad clips on the right
pub const PAD_ID: u32 = 0;

/// Result of batching: the chunks plus the layout that produced them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddedBatches {
    /// Fixed-width chunks, interleaved per batch as described above
    pub chunks:        Vec<Vec<u32>>,
    pub num_truncate:  usize,
    pub full_length:   usize,
    /// Number of complete batches emitted
    pub batch_count:   usize,
    /// Tail clips that did not fill a complete batch
    pub dropped_clips: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceBatcher {
    batch_size:      usize,
    truncate_length: usize,
}

impl SequenceBatcher {
    pub fn new(batch_size: usize, truncate_length: usize) -> PrepareResult<Self> {
        if batch_size == 0 {
            return Err(PrepareError::InvalidInput("batch_size must be > 0".to_string()));
        }
        if truncate_length == 0 {
            return Err(PrepareError::InvalidInput("truncate_length must be > 0".to_string()));
        }
        Ok(Self { batch_size, truncate_length })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn truncate_length(&self) -> usize {
        self.truncate_length
    }

    /// Pad, group and slice `clips`.
    ///
    /// Rejects an empty collection and any zero-length clip.
    pub fn batch(&self, clips: &[Vec<u32>]) -> PrepareResult<PaddedBatches> {
        if clips.is_empty() {
            return Err(PrepareError::InvalidInput("no clips to batch".to_string()));
        }
        if let Some(index) = clips.iter().position(Vec::is_empty) {
            return Err(PrepareError::InvalidInput(format!("clip {index} is empty")));
        }

        let t = self.truncate_length;
        let longest      = clips.iter().map(Vec::len).max().unwrap_or(0);
        let num_truncate = longest / t + 1;
        let full_length  = num_truncate * t;

        let batch_count   = clips.len() / self.batch_size;
        let kept          = batch_count * self.batch_size;
        let dropped_clips = clips.len() - kept;

        if dropped_clips > 0 {
            tracing::warn!(
                "Dropping {} tail clips that do not fill a batch of {}",
                dropped_clips,
                self.batch_size
            );
        }

        // ── Pad every kept clip to full_length ───────────────────────────────
        let padded: Vec<Vec<u32>> = clips[..kept]
            .iter()
            .map(|clip| {
                let mut row = clip.clone();
                row.resize(full_length, PAD_ID);
                row
            })
            .collect();

        // ── Interleave: slot-major within each batch ──────────────────────────
        let mut chunks = Vec::with_capacity(kept * num_truncate);
        for batch in padded.chunks(self.batch_size) {
            for slot in 0..num_truncate {
                for clip in batch {
                    chunks.push(clip[slot * t..(slot + 1) * t].to_vec());
                }
            }
        }

        tracing::debug!(
            "Batched {} clips: longest={}, num_truncate={}, full_length={}, {} chunks",
            kept,
            longest,
            num_truncate,
            full_length,
            chunks.len()
        );

        Ok(PaddedBatches {
            chunks,
            num_truncate,
            full_length,
            batch_count,
            dropped_clips,
        })
    }
}

// ─── Tensor Batch ─────────────────────────────────────────────────────────────
/// A stack of chunks ready for the model forward pass.
#[derive(Debug, Clone)]
pub struct ChunkBatch<B: Backend> {
    /// Token IDs, shape [rows, truncate_length]
    pub ids: Tensor<B, 2, Int>,
}

/// Stacks TokenChunks into one Int tensor.
///
/// Build the DataLoader with batch_size equal to the
/// SequenceBatcher's batch_size and without shuffling, so each
/// tensor is exactly one truncate slot of one batch.
#[derive(Clone, Debug, Default)]
pub struct ChunkBatcher;

impl<B: Backend> Batcher<B, TokenChunk, ChunkBatch<B>> for ChunkBatcher {
    fn batch(&self, items: Vec<TokenChunk>, device: &B::Device) -> ChunkBatch<B> {
        let rows = items.len();
        let cols = items.first().map_or(0, |c| c.ids.len());

        // Flatten row-major: [c1_t1 .. c1_tT, c2_t1 .. cN_tT]
        let flat: Vec<i64> = items
            .iter()
            .flat_map(|c| c.ids.iter().map(|&id| id as i64))
            .collect();

        let ids = Tensor::<B, 2, Int>::from_data(TensorData::new(flat, [rows, cols]), device);
        ChunkBatch { ids }
    }
}
