// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands and their flags:
//   prepare — transcripts → vocabulary + batches
//   stats   — word frequency report only
//   decode  — token IDs → text

use clap::{Args, Subcommand};

use crate::application::prepare_use_case::PrepareConfig;
use crate::data::{
    cleaner::CleanOptions,
    tokenizer::TokenizeOptions,
    vocabulary::DEFAULT_TOP_K,
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean, tokenize, encode and batch a directory of transcripts
    Prepare(PrepareArgs),

    /// Write the top-k word frequency report for a directory of transcripts
    Stats(StatsArgs),

    /// Decode token IDs back to text with a saved vocabulary
    Decode(DecodeArgs),
}

/// Cleaning and sentence options shared by `prepare` and `stats`
#[derive(Args, Debug, Clone)]
pub struct TextArgs {
    /// Keep "(...)" annotations such as "(Applause)"
    #[arg(long)]
    pub keep_paren: bool,

    /// Keep leading "Speaker Name:" labels
    #[arg(long)]
    pub keep_speaker: bool,

    /// Sentences need more than this many words to be kept
    #[arg(long, default_value_t = 3)]
    pub sentence_min_length: usize,
}

impl From<&TextArgs> for TokenizeOptions {
    fn from(a: &TextArgs) -> Self {
        TokenizeOptions {
            clean: CleanOptions {
                no_paren:   !a.keep_paren,
                no_speaker: !a.keep_speaker,
            },
            sentence_min_length: a.sentence_min_length,
        }
    }
}

#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Directory of .txt transcripts, one clip per file
    #[arg(long, default_value = "data/transcripts")]
    pub input_dir: String,

    /// Where vocabulary, config, report and batches are written
    #[arg(long, default_value = "output")]
    pub output_dir: String,

    #[command(flatten)]
    pub text: TextArgs,

    /// Number of most frequent words kept in the vocabulary
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,

    /// Drop out-of-vocabulary words instead of encoding them as _UNK_
    #[arg(long)]
    pub no_unknown: bool,

    /// Clips per batch; a tail that does not fill a batch is dropped
    #[arg(long, default_value_t = 100)]
    pub batch_size: usize,

    /// Width of each emitted chunk
    #[arg(long, default_value_t = 50)]
    pub truncate_length: usize,

    /// Fraction of transcripts to use, 1.0 = all
    #[arg(long, default_value_t = 1.0)]
    pub sample_portion: f64,

    /// Seed for sampling, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

/// The application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            input_dir:           a.input_dir,
            output_dir:          a.output_dir,
            no_paren:            !a.text.keep_paren,
            no_speaker:          !a.text.keep_speaker,
            sentence_min_length: a.text.sentence_min_length,
            top_k:               a.top_k,
            has_unknown:         !a.no_unknown,
            batch_size:          a.batch_size,
            truncate_length:     a.truncate_length,
            sample_portion:      a.sample_portion,
            seed:                a.seed,
        }
    }
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[arg(long, default_value = "data/transcripts")]
    pub input_dir: String,

    #[arg(long, default_value = "output")]
    pub output_dir: String,

    #[command(flatten)]
    pub text: TextArgs,

    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Token IDs, comma or space separated
    #[arg(long)]
    pub ids: String,

    /// Directory holding vocabulary.json from a `prepare` run
    #[arg(long, default_value = "output")]
    pub vocab_dir: String,
}
