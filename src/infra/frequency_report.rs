// ============================================================
// Layer 6 — Frequency Report
// ============================================================
// Writes the top-k ranked word list to CSV so it can be opened
// in a spreadsheet or plotted as a frequency chart.
//
// Example output:
//   rank,word,count
//   1,the,10523
//   2,and,7741
//   ...
//
// Why CSV?
//   The ranking is what decides the vocabulary, so it is worth
//   checking by eye. CSV opens in any spreadsheet without a
//   custom viewer.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::data::vocabulary::RankedWords;

pub const REPORT_FILE: &str = "word_frequency.csv";

/// Write `ranked` to `dir/word_frequency.csv`, replacing any old report.
pub fn write_frequency_report(dir: &Path, ranked: &RankedWords) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(REPORT_FILE);

    let file = File::create(&path)
        .with_context(|| format!("Cannot create '{}'", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "rank,word,count")?;
    for (rank, (word, count)) in ranked.words.iter().zip(&ranked.counts).enumerate() {
        writeln!(out, "{},{},{}", rank + 1, word, count)?;
    }
    out.flush()?;

    tracing::debug!("Wrote {} rows to '{}'", ranked.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_rows() {
        let dir = tempfile::tempdir().unwrap();
        let ranked = RankedWords {
            words:  vec!["a".to_string(), "b".to_string()],
            counts: vec![3, 2],
        };
        let path = write_frequency_report(dir.path(), &ranked).unwrap();
        let csv  = fs::read_to_string(path).unwrap();
        assert_eq!(csv, "rank,word,count\n1,a,3\n2,b,2\n");
    }
}
