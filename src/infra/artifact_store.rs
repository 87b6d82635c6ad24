// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Writes the products of a `prepare` run next to the vocabulary
// so a training job can pick them up:
//
//   output/
//     prepare_config.json   ← options the data was prepared with
//     vocabulary.json       ← see vocab_store.rs
//     word_frequency.csv    ← see frequency_report.rs
//     batches.json          ← chunks + batch layout
//
// Why save the config separately?
//   The IDs in batches.json only make sense with the cleaning,
//   top_k and batching options that produced them. A later
//   `decode`, or a training job, reads them back from
//   prepare_config.json instead of guessing.
//
// Reference: serde_json documentation

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::{fs, path::PathBuf};

use crate::application::prepare_use_case::PrepareConfig;
use crate::data::batcher::PaddedBatches;

pub const CONFIG_FILE: &str = "prepare_config.json";
pub const BATCHES_FILE: &str = "batches.json";

pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Create the store, making the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    pub fn save_config(&self, cfg: &PrepareConfig) -> Result<()> {
        self.write_json(CONFIG_FILE, cfg)
    }

    pub fn load_config(&self) -> Result<PrepareConfig> {
        self.read_json(CONFIG_FILE)
    }

    pub fn save_batches(&self, batches: &PaddedBatches) -> Result<()> {
        self.write_json(BATCHES_FILE, batches)
    }

    pub fn load_batches(&self) -> Result<PaddedBatches> {
        self.read_json(BATCHES_FILE)
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.dir.join(name);
        fs::write(&path, serde_json::to_string_pretty(value)?)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;
        tracing::debug!("Saved '{}'", path.display());
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.dir.join(name);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Malformed JSON in '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().join("out")).unwrap();

        let cfg = PrepareConfig { top_k: 42, seed: Some(9), ..Default::default() };
        store.save_config(&cfg).unwrap();
        assert_eq!(store.load_config().unwrap(), cfg);
    }

    #[test]
    fn test_missing_batches_is_error() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();
        assert!(store.load_batches().is_err());
    }
}
