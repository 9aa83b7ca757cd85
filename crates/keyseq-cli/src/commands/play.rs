//! Play command implementation
//!
//! Reads key identifiers from stdin, one per line, and reports how the puzzle
//! judges each press.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::info;

use crate::input::load_config;
use crate::session::Session;

/// Lines that end the session.
const QUIT_WORDS: &[&str] = &["quit", "exit"];

/// Run the play command
///
/// # Arguments
/// * `config_path` - Optional path to the puzzle config (default: stock keyboard)
/// * `seed` - Optional seed override
/// * `reveal` - Print each target as it is armed
/// * `json_output` - Emit one JSON object per press instead of text
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    config_path: Option<&str>,
    seed: Option<u32>,
    reveal: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let config = load_config(config_path)?;
    let mut session = Session::start(config, seed, reveal)?;
    info!(seed = session.controller().base_seed(), "starting interactive session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(&mut session, stdin.lock(), stdout.lock(), json_output)?;

    Ok(ExitCode::SUCCESS)
}

/// Drives a session from `reader` until EOF or a quit word.
pub fn play_session<R: BufRead, W: Write>(
    session: &mut Session,
    mut reader: R,
    mut writer: W,
    json_output: bool,
) -> Result<()> {
    if !json_output {
        let controller = session.controller();
        writeln!(
            writer,
            "{} {} keys, sequence of {} (type a key per line, 'quit' to stop)",
            "Puzzle:".cyan().bold(),
            controller.key_set().len(),
            controller.sequence_length()
        )?;
        writeln!(writer, "{} {}", "Keys:".dimmed(), controller.key_set().join(" "))?;
        if session.reveals() {
            writeln!(
                writer,
                "{} {}",
                "Target (round 1):".dimmed(),
                controller.target_sequence().join(" ")
            )?;
        }
    }

    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read key press")?;
        if read == 0 {
            break;
        }
        // Key ids are opaque; invalid UTF-8 is replaced rather than fatal.
        let line = String::from_utf8_lossy(&buf);
        let key = line.trim();
        if key.is_empty() {
            continue;
        }
        if QUIT_WORDS.contains(&key) {
            break;
        }

        let record = session.press(key);
        if json_output {
            writeln!(writer, "{}", serde_json::to_string(&record)?)?;
        } else {
            writeln!(writer, "{}", record.to_human())?;
        }
    }

    let stats = session.controller().stats();
    if json_output {
        writeln!(
            writer,
            "{}",
            serde_json::to_string(&serde_json::json!({ "stats": stats }))?
        )?;
    } else {
        writeln!(
            writer,
            "\n{} {} presses, {} solved, {} wrong",
            "Session:".cyan().bold(),
            stats.presses,
            stats.solves,
            stats.mismatches
        )?;
    }

    Ok(())
}
