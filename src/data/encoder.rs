// ============================================================
// Layer 4 — Encoder / Decoder
// ============================================================
// Assigns integer IDs to vocabulary words and the reserved
// control symbols, and maps IDs back to display text.
//
// ID layout for a vocabulary of n words:
//
//   0          _PAD_
//   1 ..= n    vocabulary words, in the order supplied
//   n + 1      _BOS_
//   n + 2      _EOS_
//   n + 3      _BOC_
//   n + 4      _EOC_
//   n + 5      _UNK_   (only with has_unknown)
//
// Every ID in 0..=n+4 (or n+5) is used exactly once.
//
// The vocabulary is taken as an ordered sequence, never a hash
// set: word IDs follow input order, so the same word list always
// yields the same encoding, on any run and any platform.
// Duplicates keep their first position. Reserved symbols found in
// the input are dropped; it is fine if there are none.
//
// Why put the control symbols above the vocabulary?
//   _PAD_ must be 0 so zero-filled tensors read as padding. The
//   other symbols follow the words so the word IDs 1..=n line up
//   with the rank order written to word_frequency.csv.
//
// Why is _UNK_ optional?
//   Without it, out-of-vocabulary words are an error in encode()
//   and are skipped by encode_lossy(). A vocabulary word that
//   happens to be spelled "_UNK_" is then just a word.
//
// Reference: Rust Book §8 (Hash Maps)

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::error::{PrepareError, PrepareResult};
use crate::domain::symbols::ReservedSymbol;

/// Symbol → ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoder {
    ids:         HashMap<String, u32>,
    /// ID → symbol name, dense over 0..len
    symbols:     Vec<String>,
    vocab_len:   usize,
    has_unknown: bool,
}

/// ID → display string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoder {
    display: Vec<String>,
}

/// Build both directions of the mapping from an ordered word list.
pub fn build_encoder_decoder<I, S>(vocab: I, has_unknown: bool) -> (Encoder, Decoder)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen  = HashSet::new();
    let mut words = Vec::new();
    for word in vocab {
        let word = word.as_ref();
        let reserved = ReservedSymbol::is_always_reserved(word)
            || (has_unknown && word == ReservedSymbol::Unk.token());
        if reserved || !seen.insert(word.to_string()) {
            continue;
        }
        words.push(word.to_string());
    }

    let vocab_len = words.len();
    let mut symbols = Vec::with_capacity(vocab_len + 6);
    let mut display = Vec::with_capacity(vocab_len + 6);

    symbols.push(ReservedSymbol::Pad.token().to_string());
    display.push(ReservedSymbol::Pad.display().to_string());

    for word in words {
        display.push(word.clone());
        symbols.push(word);
    }

    let unk = has_unknown.then_some(ReservedSymbol::Unk);
    for symbol in ReservedSymbol::ABOVE_VOCAB.into_iter().chain(unk) {
        symbols.push(symbol.token().to_string());
        display.push(symbol.display().to_string());
    }

    let ids = symbols
        .iter()
        .enumerate()
        .map(|(id, symbol)| (symbol.clone(), id as u32))
        .collect();

    tracing::debug!(
        "Built encoder: {} words + {} reserved symbols",
        vocab_len,
        symbols.len() - vocab_len
    );

    (
        Encoder { ids, symbols, vocab_len, has_unknown },
        Decoder { display },
    )
}

impl Encoder {
    pub fn id(&self, symbol: &str) -> Option<u32> {
        self.ids.get(symbol).copied()
    }

    pub fn reserved_id(&self, symbol: ReservedSymbol) -> Option<u32> {
        self.id(symbol.token())
    }

    /// The symbol name (not its display text) behind an ID
    pub fn symbol(&self, id: u32) -> Option<&str> {
        self.symbols.get(id as usize).map(String::as_str)
    }

    /// Number of vocabulary words, reserved symbols excluded
    pub fn vocab_len(&self) -> usize {
        self.vocab_len
    }

    pub fn has_unknown(&self) -> bool {
        self.has_unknown
    }

    /// Total number of assigned IDs
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Vocabulary words in ID order (IDs 1..=vocab_len)
    pub fn vocab_words(&self) -> &[String] {
        &self.symbols[1..=self.vocab_len]
    }

    /// ID that out-of-vocabulary words fall back to. Only the
    /// reserved `_UNK_` counts: without has_unknown, a vocabulary
    /// word spelled "_UNK_" is just a word and never a fallback.
    fn unknown_id(&self) -> Option<u32> {
        if self.has_unknown {
            self.reserved_id(ReservedSymbol::Unk)
        } else {
            None
        }
    }

    /// Encode a word stream. Unknown words become `_UNK_` when it
    /// is reserved, otherwise they are an error.
    pub fn encode<S: AsRef<str>>(&self, words: &[S]) -> PrepareResult<Vec<u32>> {
        let unk = self.unknown_id();
        words
            .iter()
            .map(|w| {
                let w = w.as_ref();
                self.id(w)
                    .or(unk)
                    .ok_or_else(|| PrepareError::UnknownWord(w.to_string()))
            })
            .collect()
    }

    /// Encode a word stream, skipping words with no ID.
    pub fn encode_lossy<S: AsRef<str>>(&self, words: &[S]) -> Vec<u32> {
        let unk = self.unknown_id();
        words
            .iter()
            .filter_map(|w| self.id(w.as_ref()).or(unk))
            .collect()
    }
}

impl Decoder {
    pub fn get(&self, id: u32) -> Option<&str> {
        self.display.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.display.len()
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    pub fn decode(&self, ids: &[u32]) -> PrepareResult<Vec<&str>> {
        ids.iter()
            .map(|&id| self.get(id).ok_or(PrepareError::UnknownId(id)))
            .collect()
    }

    /// Decode to text: display strings joined by single spaces,
    /// empty stand-ins (sentence and clip markers) skipped.
    pub fn decode_text(&self, ids: &[u32]) -> PrepareResult<String> {
        let parts: Vec<&str> = self
            .decode(ids)?
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        Ok(parts.join(" "))
    }
}
