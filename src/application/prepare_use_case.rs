// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Runs the full preparation pipeline in order:
//
//   Step 1: Load transcripts              (Layer 4 - data)
//   Step 2: Optionally sample a portion   (Layer 4 - data)
//   Step 3: Clean, tokenize, wrap clips   (Layer 4 - data)
//   Step 4: Build / load vocabulary       (Layer 6 - infra)
//   Step 5: Encode clips to IDs           (Layer 4 - data)
//   Step 6: Pad, truncate, batch          (Layer 4 - data)
//   Step 7: Save config, report, batches  (Layer 6 - infra)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    batcher::SequenceBatcher,
    cleaner::CleanOptions,
    loader::TextClipLoader,
    splitter::{make_rng, shuffle_take},
    tokenizer::{TokenizeOptions, Tokenizer},
    vocabulary::{build_frequency_map_parallel, top_k, DEFAULT_TOP_K},
};
use crate::domain::traits::ClipSource;
use crate::infra::{
    artifact_store::ArtifactStore,
    frequency_report::write_frequency_report,
    vocab_store::VocabularyStore,
};

// ─── Preparation Configuration ───────────────────────────────────────────────
// Every option of a preparation run. Saved next to the outputs
// so the encoded data can always be traced back to how it was made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub input_dir:           String,
    pub output_dir:          String,
    pub no_paren:            bool,
    pub no_speaker:          bool,
    pub sentence_min_length: usize,
    pub top_k:               usize,
    pub has_unknown:         bool,
    pub batch_size:          usize,
    pub truncate_length:     usize,
    /// Fraction of transcripts to keep, 1.0 = all
    pub sample_portion:      f64,
    pub seed:                Option<u64>,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            input_dir:           "data/transcripts".to_string(),
            output_dir:          "output".to_string(),
            no_paren:            true,
            no_speaker:          true,
            sentence_min_length: 3,
            top_k:               DEFAULT_TOP_K,
            has_unknown:         true,
            batch_size:          100,
            truncate_length:     50,
            sample_portion:      1.0,
            seed:                None,
        }
    }
}

impl PrepareConfig {
    pub fn tokenize_options(&self) -> TokenizeOptions {
        TokenizeOptions {
            clean: CleanOptions {
                no_paren:   self.no_paren,
                no_speaker: self.no_speaker,
            },
            sentence_min_length: self.sentence_min_length,
        }
    }
}

/// What a run produced, for the CLI to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareSummary {
    pub clips:         usize,
    pub vocab_len:     usize,
    pub chunks:        usize,
    pub batch_count:   usize,
    pub dropped_clips: usize,
}

pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<PrepareSummary> {
        let cfg = &self.config;

        // ── Step 1: Load transcripts ──────────────────────────────────────────
        let transcripts = TextClipLoader::new(&cfg.input_dir).load_all()?;
        if transcripts.is_empty() {
            bail!("No transcripts found in '{}'", cfg.input_dir);
        }

        // ── Step 2: Sample ────────────────────────────────────────────────────
        let transcripts = if cfg.sample_portion < 1.0 {
            shuffle_take(&transcripts, cfg.sample_portion, &mut make_rng(cfg.seed))
        } else {
            transcripts
        };

        // ── Step 3: Tokenize into wrapped clips ───────────────────────────────
        let tokenizer = Tokenizer::new(cfg.tokenize_options())?;
        let clips: Vec<_> = transcripts
            .iter()
            .map(|t| tokenizer.wrap_clip(&t.text))
            .collect();
        tracing::info!("Tokenized {} clips", clips.len());

        // ── Step 4: Vocabulary ────────────────────────────────────────────────
        // Markers are excluded so they never take a top-k slot
        let words: Vec<String> = clips
            .iter()
            .flat_map(|c| c.content_words().map(str::to_string))
            .collect();

        let freq   = build_frequency_map_parallel(&words);
        let ranked = top_k(&freq, cfg.top_k)?;

        let store  = ArtifactStore::new(&cfg.output_dir)?;
        write_frequency_report(store.dir(), &ranked)?;

        let record = VocabularyStore::new(&cfg.output_dir)
            .load_or_build(&ranked, cfg.top_k, cfg.has_unknown)?;
        let (encoder, _) = record.encoder_decoder();
        tracing::info!(
            "Vocabulary: {} words ({} distinct in corpus)",
            encoder.vocab_len(),
            freq.len()
        );

        // ── Step 5: Encode ────────────────────────────────────────────────────
        // With _UNK_ every word encodes; without it, out-of-vocabulary
        // words are left out of the stream.
        let encoded: Vec<Vec<u32>> = if encoder.has_unknown() {
            clips
                .iter()
                .map(|c| encoder.encode(c.words()))
                .collect::<Result<_, _>>()?
        } else {
            clips.iter().map(|c| encoder.encode_lossy(c.words())).collect()
        };

        // ── Step 6: Batch ─────────────────────────────────────────────────────
        let batches = SequenceBatcher::new(cfg.batch_size, cfg.truncate_length)?
            .batch(&encoded)?;
        tracing::info!(
            "Emitted {} chunks in {} batches ({} clips dropped from the tail)",
            batches.chunks.len(),
            batches.batch_count,
            batches.dropped_clips
        );

        // ── Step 7: Save ──────────────────────────────────────────────────────
        store.save_config(cfg)?;
        store.save_batches(&batches)?;

        Ok(PrepareSummary {
            clips:         clips.len(),
            vocab_len:     encoder.vocab_len(),
            chunks:        batches.chunks.len(),
            batch_count:   batches.batch_count,
            dropped_clips: batches.dropped_clips,
        })
    }
}
