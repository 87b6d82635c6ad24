// ============================================================
// Layer 4 — Transcript Loader
// ============================================================
// Reads raw transcripts from a directory of .txt files, one
// clip per file.
//
// Files are read in file-name order so the clip order, and
// with it the batch layout, is the same on every run.
//
// Whatever produced the files (an XML dump of talk transcripts,
// a scraper, a download step) is outside this crate; the loader
// only expects UTF-8 text with paragraphs on separate lines.
//
// Reference: Rust Book §12 (Reading a File)

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::document::Transcript;
use crate::domain::traits::ClipSource;

pub struct TextClipLoader {
    dir: PathBuf,
}

impl TextClipLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ClipSource for TextClipLoader {
    fn load_all(&self) -> Result<Vec<Transcript>> {
        // Missing directory means an empty corpus, not a failure
        if !self.dir.exists() {
            tracing::warn!(
                "Transcript directory '{}' does not exist, returning empty corpus",
                self.dir.display()
            );
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("txt"))
            .collect();
        paths.sort();

        let mut transcripts = Vec::with_capacity(paths.len());
        for path in paths {
            match load_single_transcript(&path) {
                Ok(t) => {
                    tracing::debug!("Loaded: {} ({} chars)", t.source, t.text.len());
                    transcripts.push(t);
                }
                // One unreadable file should not sink the whole corpus
                Err(e) => {
                    tracing::warn!("Skipping '{}': {:#}", path.display(), e);
                }
            }
        }

        tracing::info!("Loaded {} transcripts", transcripts.len());
        Ok(transcripts)
    }
}

fn load_single_transcript(path: &Path) -> Result<Transcript> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let source = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    Ok(Transcript::new(source, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_txt_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "second").unwrap();
        fs::write(dir.path().join("a.txt"), "first").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let docs = TextClipLoader::new(dir.path()).load_all().unwrap();
        let sources: Vec<&str> = docs.iter().map(|d| d.source.as_str()).collect();
        assert_eq!(sources, vec!["a.txt", "b.txt"]);
        assert_eq!(docs[0].text, "first");
    }

    #[test]
    fn test_missing_dir_is_empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let docs = TextClipLoader::new(dir.path().join("nope")).load_all().unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(dir.path().join("good.txt"), "fine").unwrap();

        let docs = TextClipLoader::new(dir.path()).load_all().unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].source, "good.txt");
    }
}
