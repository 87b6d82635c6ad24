// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and dispatches to the use cases
// in Layer 2. Printing the final summary is the only output
// done here; progress goes through tracing.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, DecodeArgs, PrepareArgs, StatsArgs};

use crate::data::tokenizer::TokenizeOptions;

#[derive(Parser, Debug)]
#[command(
    name = "transcript-prep",
    version,
    about = "Prepare transcript text as token-ID batches for sequence-model training."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Routes only, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Stats(args)   => run_stats(args),
            Commands::Decode(args)  => run_decode(args),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;

    tracing::info!("Preparing transcripts from: {}", args.input_dir);
    let output_dir = args.output_dir.clone();

    let summary = PrepareUseCase::new(args.into()).execute()?;

    println!(
        "Prepared {} clips: vocabulary {} words, {} chunks in {} batches ({} clips dropped). Output in '{}'.",
        summary.clips,
        summary.vocab_len,
        summary.chunks,
        summary.batch_count,
        summary.dropped_clips,
        output_dir
    );
    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<()> {
    use crate::application::stats_use_case::StatsUseCase;

    let options = TokenizeOptions::from(&args.text);
    let (ranked, path) =
        StatsUseCase::new(args.input_dir, args.output_dir, args.top_k, options).execute()?;

    for (word, count) in ranked.words.iter().zip(&ranked.counts).take(20) {
        println!("{count:>10}  {word}");
    }
    println!("Full report: {}", path.display());
    Ok(())
}

fn run_decode(args: DecodeArgs) -> Result<()> {
    use crate::application::decode_use_case::DecodeUseCase;

    let text = DecodeUseCase::new(&args.vocab_dir)?.decode(&args.ids)?;
    println!("{text}");
    Ok(())
}
