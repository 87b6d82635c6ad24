// ============================================================
// Layer 3 — Sentence and Clip Types
// ============================================================
// A Sentence is the list of words between two sentence
// boundaries. A Clip is one whole transcript flattened into a
// single word stream with boundary markers:
//
//   _BOC_ _BOS_ w w w _EOS_ _BOS_ w w w w _EOS_ _EOC_
//
// Order is significant everywhere: sentences keep the order
// they had in the text, and the markers are placed around
// them in that order.

use serde::{Deserialize, Serialize};

use crate::domain::symbols::ReservedSymbol;

/// Ordered word tokens of one sentence
pub type Sentence = Vec<String>;

/// A flattened, boundary-wrapped transcript
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    words: Vec<String>,
}

impl Clip {
    /// Wrap sentences in `_BOS_ … _EOS_` and the whole in `_BOC_ … _EOC_`.
    pub fn from_sentences<I>(sentences: I) -> Self
    where
        I: IntoIterator<Item = Sentence>,
    {
        let mut words = vec![ReservedSymbol::Boc.token().to_string()];
        for sentence in sentences {
            words.push(ReservedSymbol::Bos.token().to_string());
            words.extend(sentence);
            words.push(ReservedSymbol::Eos.token().to_string());
        }
        words.push(ReservedSymbol::Eoc.token().to_string());
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words of the clip that are not reserved symbols
    pub fn content_words(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(|w| ReservedSymbol::from_token(w).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(words: &[&str]) -> Sentence {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_wraps_sentences_in_order() {
        let clip = Clip::from_sentences(vec![sentence(&["a", "b"]), sentence(&["c"])]);
        assert_eq!(
            clip.words(),
            &["_BOC_", "_BOS_", "a", "b", "_EOS_", "_BOS_", "c", "_EOS_", "_EOC_"]
        );
    }

    #[test]
    fn test_no_sentences_still_has_clip_markers() {
        let clip = Clip::from_sentences(Vec::new());
        assert_eq!(clip.words(), &["_BOC_", "_EOC_"]);
    }

    #[test]
    fn test_content_words_skip_markers() {
        let clip = Clip::from_sentences(vec![sentence(&["x", "y"])]);
        let content: Vec<&str> = clip.content_words().collect();
        assert_eq!(content, vec!["x", "y"]);
    }
}
