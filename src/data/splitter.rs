// ============================================================
// Layer 4 — Dataset Split / Sample Utilities
// ============================================================
// Shuffling, sampling and splitting of clip collections before
// they are encoded and batched.
//
// These work on whole items (clips or labelled pairs), never on
// batched chunks: shuffling after SequenceBatcher would break
// the chunk interleaving a stateful model depends on.
//
// All randomness comes from a caller-supplied RNG. Pass
// `make_rng(Some(seed))` for reproducible runs.
//
// Why take the RNG as a parameter?
//   `prepare --seed` must give the same sample, and so the same
//   vocabulary and batches, on every run. Tests pin the seed the
//   same way.
//
// Why is the split test / validation / train from the front?
//   With do_shuffle = false the held-out sets are simply the
//   first clips, so a fixed evaluation set can be kept across
//   runs while the training portion grows.
//
// Reference: rand documentation (SliceRandom, SeedableRng)

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Seeded RNG when `seed` is set, OS entropy otherwise
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Three-way split of a dataset
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSplit<T> {
    pub train:      Vec<T>,
    pub validation: Vec<T>,
    pub test:       Vec<T>,
}

/// Split into test / validation / train, in that order from the
/// front of the (optionally shuffled) data.
///
/// Test and validation each get `size` items; `size == 0` means
/// a tenth of the data. Train gets the rest.
pub fn shuffle_split_dataset<T, R>(
    mut items:  Vec<T>,
    size:       usize,
    do_shuffle: bool,
    rng:        &mut R,
) -> DatasetSplit<T>
where
    R: Rng + ?Sized,
{
    let size = if size == 0 { items.len() / 10 } else { size };

    if do_shuffle {
        items.shuffle(rng);
    }

    let test_end = size.min(items.len());
    let val_end  = (size * 2).min(items.len());

    let train      = items.split_off(val_end);
    let validation = items.split_off(test_end);
    let test       = items;

    DatasetSplit { train, validation, test }
}

/// Shuffled random sample of `portion` (0.0..=1.0) of `items`.
pub fn shuffle_take<T: Clone, R>(items: &[T], portion: f64, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    let mut copied = items.to_vec();
    copied.shuffle(rng);

    let take = ((copied.len() as f64) * portion.clamp(0.0, 1.0)) as usize;
    copied.truncate(take);

    tracing::info!("Sampled {}/{}", copied.len(), items.len());
    copied
}

/// Drop the first `drop_number` entries labelled `target`,
/// keeping everything else in order. Used to rebalance labels.
pub fn drop_data_of_label<C, L: PartialEq>(
    dataset:     Vec<(C, L)>,
    target:      &L,
    drop_number: usize,
) -> Vec<(C, L)> {
    let mut dropped = 0usize;
    dataset
        .into_iter()
        .filter(|(_, label)| {
            if label == target && dropped < drop_number {
                dropped += 1;
                false
            } else {
                true
            }
        })
        .collect()
}
