//! KeySeq CLI - Command-line host for the key-sequence puzzle
//!
//! This binary lets the puzzle be played, replayed, previewed and validated
//! without a game engine.

use clap::Parser;
use std::process::ExitCode;

mod cli_args;

use cli_args::{Cli, Commands};
use keyseq_cli::{commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            config,
            seed,
            reveal,
            json,
        } => commands::play::run(config.as_deref(), seed, reveal, json),
        Commands::Replay {
            keys,
            config,
            seed,
            reveal,
            json,
        } => commands::replay::run(config.as_deref(), seed, &keys, reveal, json),
        Commands::Generate {
            config,
            seed,
            rounds,
            json,
        } => commands::generate::run(config.as_deref(), seed, rounds, json),
        Commands::Validate { config, json } => commands::validate::run(&config, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
