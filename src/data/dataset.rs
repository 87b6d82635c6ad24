// ============================================================
// Layer 4 — Chunk Dataset
// ============================================================
// Exposes the chunks SequenceBatcher emitted through Burn's
// Dataset trait, so a training loop can feed them to a
// DataLoader.
//
// Why a Dataset over chunks and not over clips?
//   The padding, slicing and interleaving are already done.
//   Chunk i of the dataset is chunk i of batches.json, so a
//   sequential DataLoader with batch_size rows per step reads
//   one truncate slot of one batch at a time.
//
// Why must the DataLoader not shuffle?
//   Row r of consecutive batch_size-row groups belongs to the
//   same clip. Shuffling would hand a stateful model the middle
//   of one clip as the continuation of another.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::data::batcher::PaddedBatches;

/// One fixed-width slice of an encoded clip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenChunk {
    pub ids: Vec<u32>,
}

impl TokenChunk {
    pub fn new(ids: Vec<u32>) -> Self { Self { ids } }

    /// Count of non-padding IDs
    pub fn real_tokens(&self) -> usize {
        self.ids.iter().filter(|&&id| id != 0).count()
    }
}

/// Chunks in emission order. Index i is the i-th chunk produced by
/// SequenceBatcher, so sequential reads keep the interleaving.
pub struct ChunkDataset {
    chunks: Vec<TokenChunk>,
}

impl ChunkDataset {
    pub fn new(chunks: Vec<TokenChunk>) -> Self { Self { chunks } }

    pub fn chunk_count(&self) -> usize { self.chunks.len() }
}

impl From<PaddedBatches> for ChunkDataset {
    fn from(batches: PaddedBatches) -> Self {
        Self::new(batches.chunks.into_iter().map(TokenChunk::new).collect())
    }
}

impl Dataset<TokenChunk> for ChunkDataset {
    fn get(&self, index: usize) -> Option<TokenChunk> {
        self.chunks.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.chunks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::batcher::SequenceBatcher;

    #[test]
    fn test_dataset_keeps_emission_order() {
        let batches = SequenceBatcher::new(2, 2)
            .unwrap()
            .batch(&[vec![1, 2, 3], vec![4]])
            .unwrap();
        let ds = ChunkDataset::from(batches);

        assert_eq!(ds.len(), 4);
        assert_eq!(ds.get(1), Some(TokenChunk::new(vec![4, 0])));
        assert_eq!(ds.get(2).map(|c| c.real_tokens()), Some(1));
        assert_eq!(ds.get(4), None);
    }
}
