// ============================================================
// Layer 2 — StatsUseCase
// ============================================================
// Word frequency statistics without encoding or batching:
// load, tokenize, count, rank, write the CSV report.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::data::{
    loader::TextClipLoader,
    tokenizer::{TokenizeOptions, Tokenizer},
    vocabulary::{top_frequent_words, RankedWords},
};
use crate::domain::traits::ClipSource;
use crate::infra::frequency_report::write_frequency_report;

pub struct StatsUseCase {
    input_dir:  String,
    output_dir: String,
    top_k:      usize,
    options:    TokenizeOptions,
}

impl StatsUseCase {
    pub fn new(
        input_dir:  impl Into<String>,
        output_dir: impl Into<String>,
        top_k:      usize,
        options:    TokenizeOptions,
    ) -> Self {
        Self {
            input_dir:  input_dir.into(),
            output_dir: output_dir.into(),
            top_k,
            options,
        }
    }

    /// Returns the ranked words and where the report was written
    pub fn execute(&self) -> Result<(RankedWords, PathBuf)> {
        let transcripts = TextClipLoader::new(&self.input_dir).load_all()?;
        let tokenizer   = Tokenizer::new(self.options)?;

        let words: Vec<String> = transcripts
            .iter()
            .flat_map(|t| tokenizer.tokenize(&t.text))
            .flatten()
            .collect();
        tracing::info!("Counting {} words from {} transcripts", words.len(), transcripts.len());

        let ranked = top_frequent_words(&words, self.top_k)?;
        let path   = write_frequency_report(Path::new(&self.output_dir), &ranked)?;
        Ok((ranked, path))
    }
}
