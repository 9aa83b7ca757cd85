//! CLI argument definitions for the KeySeq command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{ArgAction, Parser, Subcommand};

/// Upper bound for `generate --rounds`; every previewed round is held in memory.
pub(crate) const MAX_PREVIEW_ROUNDS: u64 = 10_000;

/// KeySeq - Key-Sequence Puzzle Host
#[derive(Parser)]
#[command(name = "keyseq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Play the puzzle interactively, one key per line on stdin
    Play {
        /// Path to the puzzle config (JSON); defaults to the 16-key keyboard
        #[arg(short, long)]
        config: Option<String>,

        /// Seed override for target generation
        #[arg(short, long)]
        seed: Option<u32>,

        /// Print each target sequence as it is armed
        #[arg(long)]
        reveal: bool,

        /// Output one JSON object per press (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Replay a fixed list of key presses against a seeded puzzle
    Replay {
        /// Comma-separated key presses, in order
        #[arg(short, long, value_delimiter = ',', required = true)]
        keys: Vec<String>,

        /// Path to the puzzle config (JSON); defaults to the 16-key keyboard
        #[arg(short, long)]
        config: Option<String>,

        /// Seed override for target generation
        #[arg(short, long)]
        seed: Option<u32>,

        /// Show each target sequence as it is armed
        #[arg(long)]
        reveal: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Preview the target sequences a seed produces
    Generate {
        /// Path to the puzzle config (JSON); defaults to the 16-key keyboard
        #[arg(short, long)]
        config: Option<String>,

        /// Seed override for target generation
        #[arg(short, long)]
        seed: Option<u32>,

        /// Number of rounds to preview (1-10000)
        #[arg(
            short,
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u64).range(1..=MAX_PREVIEW_ROUNDS)
        )]
        rounds: u64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a puzzle config file
    Validate {
        /// Path to the puzzle config (JSON)
        #[arg(short, long)]
        config: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}
