// ============================================================
// Layer 4 — Text Cleaner
// ============================================================
// Rewrites one paragraph of raw transcript text into lowercase
// words and periods, ready for sentence splitting.
//
// Transcripts carry noise that is not part of what was said:
//   - audience annotations in parentheses: "(Laughter)"
//   - speaker labels at the start of a line: "Chris Anderson: ..."
//   - punctuation that should end a sentence: "?" and "!"
//   - punctuation that should not: "," and "..."
//
// Cleaning steps (applied in this order, order matters):
//   1. Lowercase
//   2. Regularise punctuation: ? ! → "."   , → " "   "..." → " "
//   3. Remove "( ... )" spans                  (if no_paren)
//   4. Remove a leading "name:" of ≤ 20 chars   (if no_speaker)
//   5. Replace every run outside [a-z0-9.] with one space
//
// Step 2 must run before anything splits on periods, otherwise
// "?" and "!" would never end a sentence. The ellipsis rewrite
// is a plain substring replace: exactly "..." is caught, and
// since "?" and "!" were already turned into periods "?.."
// becomes an ellipsis too.
//
// Parenthesis removal is non-greedy and non-nested:
//   "a (b (c) d) e" → "a  d) e"
// The stray ")" is left in place and later blanked by step 5.
//
// Every step is a total String → String function; none of
// them can fail once the patterns are compiled.
//
// Why compile the patterns once in TextCleaner::new?
//   clean() runs once per paragraph of every transcript. The
//   regexes are built up front, so a bad pattern surfaces as an
//   error before any text is touched.
//
// Reference: regex crate documentation
//            Rust Book §8 (Strings in Rust)

use regex::Regex;

use crate::domain::error::PrepareResult;

/// Maximum length of a speaker label before its colon
pub const SPEAKER_NAME_MAX_CHARS: usize = 20;

/// Toggles for the optional cleaning steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanOptions {
    /// Drop "(...)" annotations such as "(Applause)"
    pub no_paren: bool,
    /// Drop a leading "Speaker Name:" label
    pub no_speaker: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self { no_paren: true, no_speaker: true }
    }
}

/// One rewrite stage of the cleaning pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleaningStep {
    Lowercase,
    RegulatePunctuation,
    RemoveParen,
    RemoveSpeakerName,
    AlphanumericPeriodOnly,
}

/// The composed cleaning function.
///
/// Holds the ordered list of enabled steps and the compiled
/// patterns they need, so patterns are built once per cleaner
/// rather than once per paragraph.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    steps:        Vec<CleaningStep>,
    paren:        Regex,
    speaker_name: Regex,
    non_alnum:    Regex,
}

impl TextCleaner {
    pub fn new(options: CleanOptions) -> PrepareResult<Self> {
        let mut steps = vec![CleaningStep::Lowercase, CleaningStep::RegulatePunctuation];
        if options.no_paren {
            steps.push(CleaningStep::RemoveParen);
        }
        if options.no_speaker {
            steps.push(CleaningStep::RemoveSpeakerName);
        }
        steps.push(CleaningStep::AlphanumericPeriodOnly);

        Ok(Self {
            steps,
            paren:        Regex::new(r"\([^)]*\)")?,
            speaker_name: Regex::new(&format!(r"^[^:]{{0,{SPEAKER_NAME_MAX_CHARS}}}:"))?,
            non_alnum:    Regex::new(r"[^a-z0-9.]+")?,
        })
    }

    /// The enabled steps, in the order `clean` applies them
    pub fn steps(&self) -> &[CleaningStep] {
        &self.steps
    }

    /// Run every enabled step over `text`.
    pub fn clean(&self, text: &str) -> String {
        self.steps
            .iter()
            .fold(text.to_string(), |acc, &step| self.apply(step, &acc))
    }

    /// Run a single step, regardless of whether it is enabled.
    pub fn apply(&self, step: CleaningStep, text: &str) -> String {
        match step {
            CleaningStep::Lowercase              => text.to_lowercase(),
            CleaningStep::RegulatePunctuation    => regulate_punctuation(text),
            CleaningStep::RemoveParen            => self.remove_paren(text),
            CleaningStep::RemoveSpeakerName      => self.remove_speaker_name(text),
            CleaningStep::AlphanumericPeriodOnly => self.alphanumeric_period_only(text),
        }
    }

    pub fn remove_paren(&self, text: &str) -> String {
        self.paren.replace_all(text, "").into_owned()
    }

    /// Strip a "name:" prefix when the name is at most 20 chars.
    /// Anything else, including a real sentence with a colon
    /// further in, comes back unchanged.
    pub fn remove_speaker_name(&self, text: &str) -> String {
        self.speaker_name.replace(text, "").into_owned()
    }

    pub fn alphanumeric_period_only(&self, text: &str) -> String {
        self.non_alnum.replace_all(text, " ").into_owned()
    }
}

fn regulate_punctuation(text: &str) -> String {
    text.replace('?', ".")
        .replace('!', ".")
        .replace(',', " ")
        .replace("...", " ")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn cleaner() -> TextCleaner {
        TextCleaner::new(CleanOptions::default()).unwrap()
    }

    #[test]
    fn test_step_order() {
        let c = cleaner();
        assert_eq!(
            c.steps(),
            &[
                CleaningStep::Lowercase,
                CleaningStep::RegulatePunctuation,
                CleaningStep::RemoveParen,
                CleaningStep::RemoveSpeakerName,
                CleaningStep::AlphanumericPeriodOnly,
            ]
        );
    }

    #[test]
    fn test_optional_steps_can_be_disabled() {
        let c = TextCleaner::new(CleanOptions { no_paren: false, no_speaker: false }).unwrap();
        assert_eq!(c.steps().len(), 3);
        assert_eq!(c.clean("Hi (there)"), "hi there ");
    }

    #[test]
    fn test_paren_and_case() {
        assert_eq!(cleaner().clean("Hello (laughter) World. Bye."), "hello world. bye.");
    }

    #[test]
    fn test_question_and_exclamation_end_sentences() {
        assert_eq!(cleaner().clean("Really? Yes!"), "really. yes.");
    }

    #[test]
    fn test_ellipsis_is_exact_substring() {
        let c = cleaner();
        assert_eq!(regulate_punctuation("wait...then"), "wait then");
        // four periods: the first three collapse, one remains
        assert_eq!(regulate_punctuation("wait....then"), "wait .then");
        assert_eq!(c.clean("a,b"), "a b");
    }

    #[test]
    fn test_nested_paren_leaves_trailing_close() {
        let c = cleaner();
        assert_eq!(c.remove_paren("a (b (c) d) e"), "a  d) e");
    }

    #[test]
    fn test_speaker_name_removed() {
        let c = cleaner();
        assert_eq!(c.remove_speaker_name("chris anderson: welcome"), " welcome");
        assert_eq!(c.clean("Chris Anderson: Welcome back."), " welcome back.");
    }

    #[test]
    fn test_long_speaker_prefix_kept() {
        let c = cleaner();
        let text = "this is a rather long opening clause: it goes on";
        assert_eq!(c.remove_speaker_name(text), text);
    }

    #[test]
    fn test_colon_free_line_unchanged() {
        let c = cleaner();
        assert_eq!(c.remove_speaker_name("no label here"), "no label here");
    }

    #[test]
    fn test_speaker_name_limit_is_twenty_chars() {
        let c = cleaner();
        let twenty = "a".repeat(20);
        let twenty_one = "a".repeat(21);
        assert_eq!(c.remove_speaker_name(&format!("{twenty}:x")), "x");
        assert_eq!(
            c.remove_speaker_name(&format!("{twenty_one}:x")),
            format!("{twenty_one}:x")
        );
    }

    #[test]
    fn test_alphanumeric_filter_is_idempotent() {
        let c = cleaner();
        for s in ["héllo, wörld!!", "a--b__c..d", "", "   ", "ok 42. fine"] {
            let once  = c.alphanumeric_period_only(s);
            let twice = c.alphanumeric_period_only(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(cleaner().clean(""), "");
    }
}
