// ============================================================
// Layer 6 — Vocabulary Store
// ============================================================
// Saves the ranked word list an encoder was built from, and
// rebuilds the exact same encoder from it later.
//
// The record stores words in ID order, not as a set, so the
// word → ID mapping survives a save/load unchanged:
//
//   vocabulary.json
//   {
//     "words": ["the", "and", "to", ...],   ← IDs 1, 2, 3, ...
//     "top_k": 1000,
//     "has_unknown": true
//   }
//
// Why keep the vocabulary on disk at all?
//   The IDs in batches.json only mean something together with
//   the word list that produced them. A training job, and a
//   later `decode`, must see the same list.
//
// When is an existing file reused?
//   load_or_build reuses vocabulary.json only when it was built
//   with the same top_k and has_unknown as the current run.
//   Otherwise it is rebuilt from the new ranking and overwritten,
//   so the saved config, the vocabulary and the batches always
//   describe the same run.
//
// Reference: serde_json documentation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::data::encoder::{build_encoder_decoder, Decoder, Encoder};
use crate::data::vocabulary::RankedWords;

pub const VOCABULARY_FILE: &str = "vocabulary.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRecord {
    /// Vocabulary words in ID order
    pub words:       Vec<String>,
    /// Ranking cut-off the words were taken with
    pub top_k:       usize,
    pub has_unknown: bool,
}

impl VocabularyRecord {
    pub fn from_encoder(encoder: &Encoder, top_k: usize) -> Self {
        Self {
            words:       encoder.vocab_words().to_vec(),
            top_k,
            has_unknown: encoder.has_unknown(),
        }
    }

    pub fn encoder_decoder(&self) -> (Encoder, Decoder) {
        build_encoder_decoder(&self.words, self.has_unknown)
    }

    /// True when this record was built with the given settings
    pub fn matches(&self, top_k: usize, has_unknown: bool) -> bool {
        self.top_k == top_k && self.has_unknown == has_unknown
    }
}

pub struct VocabularyStore {
    dir: PathBuf,
}

impl VocabularyStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(VOCABULARY_FILE)
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Reuse the saved vocabulary if it was built with the same
    /// `top_k` and `has_unknown`; otherwise build one from `ranked`
    /// in rank order and save it over the old one.
    pub fn load_or_build(
        &self,
        ranked:      &RankedWords,
        top_k:       usize,
        has_unknown: bool,
    ) -> Result<VocabularyRecord> {
        if self.exists() {
            let existing = self.load()?;
            if existing.matches(top_k, has_unknown) {
                tracing::info!("Vocabulary already present, reusing '{}'", self.path().display());
                return Ok(existing);
            }
            tracing::warn!(
                "Saved vocabulary was built with top_k={} has_unknown={}, \
                 this run uses top_k={} has_unknown={}; rebuilding",
                existing.top_k,
                existing.has_unknown,
                top_k,
                has_unknown
            );
        }

        // ── Build from the ranking ────────────────────────────────────────────
        // Rank order becomes ID order: the most frequent word gets ID 1
        tracing::info!("Building new vocabulary from {} ranked words", ranked.len());
        let (encoder, _) = build_encoder_decoder(&ranked.words, has_unknown);
        let record = VocabularyRecord::from_encoder(&encoder, top_k);
        self.save(&record)?;
        Ok(record)
    }

    pub fn save(&self, record: &VocabularyRecord) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        let path = self.path();
        fs::write(&path, serde_json::to_string_pretty(record)?)
            .with_context(|| format!("Cannot write vocabulary to '{}'", path.display()))?;

        tracing::info!(
            "Vocabulary of {} words saved to '{}'",
            record.words.len(),
            path.display()
        );
        Ok(())
    }

    pub fn load(&self) -> Result<VocabularyRecord> {
        let path = self.path();
        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read vocabulary from '{}'. Have you run 'prepare' first?",
                path.display()
            )
        })?;
        serde_json::from_str(&json)
            .with_context(|| format!("Malformed vocabulary in '{}'", path.display()))
    }
}
