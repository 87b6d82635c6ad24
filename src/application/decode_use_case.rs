// ============================================================
// Layer 2 — DecodeUseCase
// ============================================================
// Turns model output IDs back into text using the vocabulary a
// `prepare` run saved. Reserved symbols decode to their
// stand-ins, so sentence ends come back as periods.

use anyhow::{Context, Result};

use crate::data::encoder::Decoder;
use crate::infra::vocab_store::VocabularyStore;

pub struct DecodeUseCase {
    decoder: Decoder,
}

impl DecodeUseCase {
    pub fn new(vocab_dir: &str) -> Result<Self> {
        let record = VocabularyStore::new(vocab_dir).load()?;
        let (_, decoder) = record.encoder_decoder();
        Ok(Self { decoder })
    }

    /// Decode a comma- or whitespace-separated ID list, e.g. "12, 7, 3"
    pub fn decode(&self, ids: &str) -> Result<String> {
        let ids = parse_ids(ids)?;
        Ok(self.decoder.decode_text(&ids)?)
    }
}

fn parse_ids(raw: &str) -> Result<Vec<u32>> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u32>().with_context(|| format!("'{s}' is not a token id")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::vocab_store::VocabularyRecord;

    #[test]
    fn test_parse_ids() {
        assert_eq!(parse_ids("1, 2 3,4").unwrap(), vec![1, 2, 3, 4]);
        assert!(parse_ids("1,x").is_err());
        assert!(parse_ids("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_with_saved_vocabulary() {
        let dir = tempfile::tempdir().unwrap();
        VocabularyStore::new(dir.path())
            .save(&VocabularyRecord {
                words:       vec!["hello".to_string(), "world".to_string()],
                top_k:       2,
                has_unknown: false,
            })
            .unwrap();

        let uc = DecodeUseCase::new(dir.path().to_str().unwrap()).unwrap();
        // hello=1 world=2 _BOS_=3 _EOS_=4
        assert_eq!(uc.decode("3,1,2,4").unwrap(), "hello world .");
        assert!(uc.decode("42").is_err());
    }
}
