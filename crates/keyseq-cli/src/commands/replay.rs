//! Replay command implementation
//!
//! Feeds a fixed list of key presses to a seeded puzzle and reports every
//! outcome. Useful for reproducing a session exactly.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use tracing::info;

use super::json_output::ReplayOutput;
use crate::input::load_config;
use crate::session::Session;

/// Run the replay command
///
/// # Arguments
/// * `config_path` - Optional path to the puzzle config (default: stock keyboard)
/// * `seed` - Optional seed override
/// * `keys` - Key presses, in order
/// * `reveal` - Show each target as it is armed
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    config_path: Option<&str>,
    seed: Option<u32>,
    keys: &[String],
    reveal: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let config = load_config(config_path)?;
    info!(presses = keys.len(), "replaying key presses");
    let output = replay(Session::start(config, seed, reveal)?, keys);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} seed {} ({} keys per sequence)",
        "Replaying:".cyan().bold(),
        output.seed,
        output.sequence_length
    );
    if let Some(target) = &output.initial_target {
        println!("{} {}", "Target (round 1):".dimmed(), target.join(" "));
    }
    for record in &output.presses {
        println!("{}", record.to_human());
    }
    println!(
        "\n{} {} presses, {} solved, {} wrong",
        "Session:".cyan().bold(),
        output.stats.presses,
        output.stats.solves,
        output.stats.mismatches
    );

    Ok(ExitCode::SUCCESS)
}

/// Presses every key in order and collects the records.
pub fn replay(mut session: Session, keys: &[String]) -> ReplayOutput {
    let initial_target = session
        .reveals()
        .then(|| session.controller().target_sequence().to_vec());
    let presses = keys.iter().map(|key| session.press(key)).collect();
    let controller = session.controller();

    ReplayOutput {
        seed: controller.base_seed(),
        sequence_length: controller.sequence_length(),
        initial_target,
        presses,
        stats: controller.stats(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyseq_puzzle::{preview_rounds, Outcome, PuzzleConfig};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_replay_solves_previewed_round() {
        let config = PuzzleConfig::new(["A", "B", "C", "D"], 3);
        let target = preview_rounds(&config, 21, 1).unwrap().remove(0);
        let mut keys = target.clone();
        keys.push("nope".to_string());

        let output = replay(Session::start(config, Some(21), false).unwrap(), &keys);
        let outcomes: Vec<Outcome> = output.presses.iter().map(|r| r.outcome).collect();

        assert_eq!(
            outcomes,
            vec![
                Outcome::InProgress,
                Outcome::InProgress,
                Outcome::Solved,
                Outcome::Mismatch,
            ]
        );
        assert_eq!(output.seed, 21);
        assert_eq!(output.stats.solves, 1);
        assert_eq!(output.stats.mismatches, 1);
    }

    #[test]
    fn test_replay_reveal_shows_first_target() {
        let config = PuzzleConfig::new(["A", "B", "C", "D"], 3);
        let target = preview_rounds(&config, 21, 1).unwrap().remove(0);
        let keys = vec!["nope".to_string()];

        let output = replay(Session::start(config, Some(21), true).unwrap(), &keys);
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(output.initial_target, Some(target.clone()));
        assert_eq!(json["initial_target"], serde_json::json!(target));
    }

    #[test]
    fn test_replay_hides_first_target_without_reveal() {
        let config = PuzzleConfig::new(["A", "B", "C", "D"], 3);
        let keys = vec!["nope".to_string()];

        let output = replay(Session::start(config, Some(21), false).unwrap(), &keys);
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(output.initial_target, None);
        assert!(json.get("initial_target").is_none());
    }

    #[test]
    fn test_replay_is_reproducible() {
        let config = PuzzleConfig::default();
        let keys: Vec<String> = ["C4", "E4", "G4", "C5"].iter().map(|k| k.to_string()).collect();

        let first = replay(Session::start(config.clone(), Some(5), true).unwrap(), &keys);
        let second = replay(Session::start(config, Some(5), true).unwrap(), &keys);

        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}
