//! Sqnces Solver - CLI
//!
//! Analysis assistant for the Sqnces word puzzle: evaluate guesses against
//! the hidden word, track the shrinking candidate set, and rank next guesses
//! by expected remaining turns.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use sqnces_solver::{
    commands::{analyze_word, run_play, run_recommend},
    core::{Variant, builtin_variant},
    corpus::{Lexicon, load_lexicon},
    output::print_analysis,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sqnces_solver",
    about = "Sqnces assistant using information theory and word-frequency modeling",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle length: 6, 7, or 8
    #[arg(short, long, global = true, default_value = "6")]
    length: usize,

    /// Directory with guesses-{len}.json and answers-{len}-index.json
    #[arg(short, long, global = true, default_value = "data")]
    data_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game with live analysis (default)
    Play {
        /// Practice against a random target instead of the built-in word
        #[arg(short, long)]
        random_target: bool,

        /// Recommendations to show after each guess
        #[arg(short, long, default_value = "8")]
        top: usize,
    },

    /// Analyze the entropy of a specific guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Rank all remaining candidates after an optional guess history
    Recommend {
        /// Guess to replay before ranking (repeatable)
        #[arg(short, long = "guess")]
        guesses: Vec<String>,

        /// Limit the number of rows printed
        #[arg(short, long)]
        top: Option<usize>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let lexicon = load_lexicon(&cli.data_dir, cli.length)
        .with_context(|| format!("loading word data for length {}", cli.length))?;

    let variant = builtin_variant(cli.length)
        .ok_or_else(|| anyhow!("unsupported puzzle length {} (use 6, 7, or 8)", cli.length))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        random_target: false,
        top: 8,
    });

    match command {
        Commands::Play { random_target, top } => {
            let variant = if random_target {
                random_variant(&variant, &lexicon)?
            } else {
                variant
            };
            run_play(variant, &lexicon, top).map_err(|e| anyhow!(e))
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &variant, &lexicon).map_err(|e| anyhow!(e))?;
            print_analysis(&result);
            Ok(())
        }
        Commands::Recommend { guesses, top, json } => {
            run_recommend(variant, &lexicon, &guesses, top, json).map_err(|e| anyhow!(e))
        }
    }
}

/// Swap the built-in target for a random word from the candidate pool
fn random_variant(base: &Variant, lexicon: &Lexicon) -> Result<Variant> {
    use rand::prelude::IndexedRandom;

    let pool = lexicon.candidate_pool(base.sequence());
    let target = pool
        .choose(&mut rand::rng())
        .cloned()
        .ok_or_else(|| anyhow!("no words containing '{}' in the answer pool", base.sequence()))?;

    Variant::new(target, base.sequence(), base.frequency_cutoff())
        .context("constructing practice variant")
}
