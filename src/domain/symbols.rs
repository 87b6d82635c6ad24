// ============================================================
// Layer 3 — Reserved Symbols
// ============================================================
// Control tokens with fixed roles. Their encoder keys and
// decoder stand-ins are a contract with every consumer of the
// encoded data and must not change:
//
//   symbol   encoder id         decodes to
//   _PAD_    0                  "*"
//   _BOS_    vocab_len + 1      ""
//   _EOS_    vocab_len + 2      "."
//   _BOC_    vocab_len + 3      ""
//   _EOC_    vocab_len + 4      ""
//   _UNK_    vocab_len + 5      "?"   (only when requested)
//
// _EOS_ decoding to a period rebuilds sentence ends when a
// decoded stream is turned back into text.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservedSymbol {
    Pad,
    Bos,
    Eos,
    Boc,
    Eoc,
    Unk,
}

impl ReservedSymbol {
    /// Symbols placed above the vocabulary range, in ID order.
    /// `_PAD_` is not listed because it always sits at 0.
    pub const ABOVE_VOCAB: [ReservedSymbol; 4] = [
        ReservedSymbol::Bos,
        ReservedSymbol::Eos,
        ReservedSymbol::Boc,
        ReservedSymbol::Eoc,
    ];

    /// The five symbols that are always reserved.
    pub const ALWAYS: [ReservedSymbol; 5] = [
        ReservedSymbol::Pad,
        ReservedSymbol::Bos,
        ReservedSymbol::Eos,
        ReservedSymbol::Boc,
        ReservedSymbol::Eoc,
    ];

    /// Encoder key, e.g. `_BOS_`
    pub fn token(self) -> &'static str {
        match self {
            ReservedSymbol::Pad => "_PAD_",
            ReservedSymbol::Bos => "_BOS_",
            ReservedSymbol::Eos => "_EOS_",
            ReservedSymbol::Boc => "_BOC_",
            ReservedSymbol::Eoc => "_EOC_",
            ReservedSymbol::Unk => "_UNK_",
        }
    }

    /// Human-readable stand-in returned by the decoder
    pub fn display(self) -> &'static str {
        match self {
            ReservedSymbol::Pad => "*",
            ReservedSymbol::Eos => ".",
            ReservedSymbol::Unk => "?",
            ReservedSymbol::Bos | ReservedSymbol::Boc | ReservedSymbol::Eoc => "",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "_PAD_" => Some(ReservedSymbol::Pad),
            "_BOS_" => Some(ReservedSymbol::Bos),
            "_EOS_" => Some(ReservedSymbol::Eos),
            "_BOC_" => Some(ReservedSymbol::Boc),
            "_EOC_" => Some(ReservedSymbol::Eoc),
            "_UNK_" => Some(ReservedSymbol::Unk),
            _ => None,
        }
    }

    /// True for the five always-reserved symbols. `_UNK_` is only
    /// reserved on request, so a vocabulary may legitimately carry it.
    pub fn is_always_reserved(token: &str) -> bool {
        Self::ALWAYS.iter().any(|s| s.token() == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for s in [
            ReservedSymbol::Pad,
            ReservedSymbol::Bos,
            ReservedSymbol::Eos,
            ReservedSymbol::Boc,
            ReservedSymbol::Eoc,
            ReservedSymbol::Unk,
        ] {
            assert_eq!(ReservedSymbol::from_token(s.token()), Some(s));
        }
        assert_eq!(ReservedSymbol::from_token("cat"), None);
    }

    #[test]
    fn test_display_contract() {
        assert_eq!(ReservedSymbol::Pad.display(), "*");
        assert_eq!(ReservedSymbol::Bos.display(), "");
        assert_eq!(ReservedSymbol::Eos.display(), ".");
        assert_eq!(ReservedSymbol::Boc.display(), "");
        assert_eq!(ReservedSymbol::Eoc.display(), "");
        assert_eq!(ReservedSymbol::Unk.display(), "?");
    }

    #[test]
    fn test_unk_is_not_always_reserved() {
        assert!(ReservedSymbol::is_always_reserved("_EOC_"));
        assert!(!ReservedSymbol::is_always_reserved("_UNK_"));
    }
}
