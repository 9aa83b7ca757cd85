//! Generate command implementation
//!
//! Previews the target sequences a seed produces, round by round.

use anyhow::{Context, Result};
use colored::Colorize;
use keyseq_puzzle::rng::random_base_seed;
use keyseq_puzzle::{preview_rounds, PuzzleConfig};
use std::process::ExitCode;

use super::json_output::{GenerateOutput, RoundOutput};
use crate::input::load_config;

/// Run the generate command
///
/// # Arguments
/// * `config_path` - Optional path to the puzzle config (default: stock keyboard)
/// * `seed` - Optional seed override; falls back to the config seed, then a random one
/// * `rounds` - Number of rounds to preview
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    config_path: Option<&str>,
    seed: Option<u32>,
    rounds: u64,
    json_output: bool,
) -> Result<ExitCode> {
    let config = load_config(config_path)?;
    let seed = seed.or(config.seed).unwrap_or_else(random_base_seed);
    let output = generate(config_path.unwrap_or("<default>"), &config, seed, rounds)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} seed {}", "Generating:".cyan().bold(), output.seed);
    for round in &output.rounds {
        println!(
            "  {} {}",
            format!("round {:>3}:", round.round).as_str().dimmed(),
            round.sequence.join(" ")
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Previews `rounds` targets for the given config and seed.
pub fn generate(
    source: &str,
    config: &PuzzleConfig,
    seed: u32,
    rounds: u64,
) -> Result<GenerateOutput> {
    let sequences = preview_rounds(config, seed, rounds)
        .with_context(|| format!("Invalid puzzle config: {}", source))?;

    Ok(GenerateOutput {
        seed,
        rounds: sequences
            .into_iter()
            .zip(1..)
            .map(|(sequence, round)| RoundOutput { round, sequence })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyseq_puzzle::PuzzleController;

    #[test]
    fn test_generate_numbers_rounds() {
        let config = PuzzleConfig::new(["A", "B", "C"], 2);
        let output = generate("test", &config, 8, 3).unwrap();

        assert_eq!(output.seed, 8);
        let numbers: Vec<u64> = output.rounds.iter().map(|r| r.round).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(output.rounds.iter().all(|r| r.sequence.len() == 2));
    }

    #[test]
    fn test_generate_first_round_matches_controller() {
        let config = PuzzleConfig::default();
        let output = generate("test", &config, 1234, 1).unwrap();
        let controller = PuzzleController::builder(config).seed(1234).build().unwrap();

        assert_eq!(output.rounds[0].sequence, controller.target_sequence());
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let config = PuzzleConfig::new(Vec::<String>::new(), 2);
        let err = generate("broken.json", &config, 1, 1).unwrap_err();

        assert!(err.to_string().contains("broken.json"));
    }
}
