// ============================================================
// Layer 4 — Sentence / Word Tokenizer
// ============================================================
// Splits a raw transcript into sentences of words.
//
//   raw text
//     │  split on '\n'            → paragraphs
//     │  TextCleaner::clean       → "words and periods only"
//     │  split on '.'             → candidate sentences
//     │  split on ' ', trim, drop empties → words
//     ▼
//   keep sentences with more than `sentence_min_length` words
//
// Short sentences ("thank you.", "(applause)" leftovers, lone
// numbers) carry little context, so the default drops anything
// with three words or fewer. Empty and whitespace-only
// sentences are always dropped, silently.
//
// Sentence order is preserved across paragraphs; wrap_clip
// relies on it when placing the boundary markers.
//
// Why wrap clips in markers instead of keeping periods?
//   _BOS_/_EOS_ around each sentence and _BOC_/_EOC_ around the
//   whole clip give the model explicit boundaries with their own
//   IDs. The decoder turns _EOS_ back into ".", so no text is lost.
//
// Reference: Rust Book §13 (Iterators and Closures)

use crate::data::cleaner::{CleanOptions, TextCleaner};
use crate::domain::clip::{Clip, Sentence};
use crate::domain::error::PrepareResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizeOptions {
    pub clean: CleanOptions,
    /// A sentence is kept only if it has strictly more words than this
    pub sentence_min_length: usize,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            clean:               CleanOptions::default(),
            sentence_min_length: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    cleaner:             TextCleaner,
    sentence_min_length: usize,
}

impl Tokenizer {
    pub fn new(options: TokenizeOptions) -> PrepareResult<Self> {
        Ok(Self {
            cleaner:             TextCleaner::new(options.clean)?,
            sentence_min_length: options.sentence_min_length,
        })
    }

    pub fn cleaner(&self) -> &TextCleaner {
        &self.cleaner
    }

    /// Cut `text` into cleaned word sentences.
    pub fn tokenize(&self, text: &str) -> Vec<Sentence> {
        text.split('\n')
            .flat_map(|paragraph| {
                let cleaned = self.cleaner.clean(paragraph);
                cleaned
                    .split('.')
                    .map(split_words)
                    .collect::<Vec<_>>()
            })
            .filter(|sentence| sentence.len() > self.sentence_min_length)
            .collect()
    }

    /// Tokenize and flatten into one boundary-wrapped clip.
    pub fn wrap_clip(&self, text: &str) -> Clip {
        let sentences = self.tokenize(text);
        tracing::trace!("Wrapping clip of {} sentences", sentences.len());
        Clip::from_sentences(sentences)
    }
}

fn split_words(sentence: &str) -> Sentence {
    sentence
        .split(' ')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer(min: usize) -> Tokenizer {
        Tokenizer::new(TokenizeOptions { sentence_min_length: min, ..Default::default() }).unwrap()
    }

    fn words(s: &[&str]) -> Sentence {
        s.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_paren_example() {
        let t = tokenizer(0);
        assert_eq!(
            t.tokenize("Hello (laughter) World. Bye."),
            vec![words(&["hello", "world"]), words(&["bye"])]
        );
    }

    #[test]
    fn test_default_min_length_drops_short_sentences() {
        let t = tokenizer(3);
        let out = t.tokenize("Thank you. This talk is about rust.");
        assert_eq!(out, vec![words(&["this", "talk", "is", "about", "rust"])]);
    }

    #[test]
    fn test_min_length_is_strict() {
        let t = tokenizer(3);
        assert!(t.tokenize("one two three.").is_empty());
        assert_eq!(t.tokenize("one two three four.").len(), 1);
    }

    #[test]
    fn test_paragraph_order_preserved() {
        let t = tokenizer(0);
        let out = t.tokenize("first para.\nsecond para. third one");
        assert_eq!(
            out,
            vec![words(&["first", "para"]), words(&["second", "para"]), words(&["third", "one"])]
        );
    }

    #[test]
    fn test_speaker_stripped_per_paragraph() {
        let t = tokenizer(0);
        let out = t.tokenize("Host: welcome all\nGuest: thanks");
        assert_eq!(out, vec![words(&["welcome", "all"]), words(&["thanks"])]);
    }

    #[test]
    fn test_wrap_clip() {
        let t = tokenizer(0);
        let clip = t.wrap_clip("Hi there. Bye now!");
        assert_eq!(
            clip.words(),
            &["_BOC_", "_BOS_", "hi", "there", "_EOS_", "_BOS_", "bye", "now", "_EOS_", "_EOC_"]
        );
    }

    #[test]
    fn test_empty_text() {
        let t = tokenizer(0);
        assert!(t.tokenize("").is_empty());
        assert_eq!(t.wrap_clip("   \n  ").words(), &["_BOC_", "_EOC_"]);
    }
}
