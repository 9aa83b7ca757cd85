//! Validate command implementation
//!
//! Checks a puzzle config file without starting a session.

use anyhow::{Context, Result};
use colored::Colorize;
use keyseq_puzzle::{PuzzleConfig, ValidationResult};
use std::process::ExitCode;

use super::json_output::{JsonIssue, ValidateOutput};

/// Run the validate command
///
/// # Arguments
/// * `config_path` - Path to the puzzle config JSON file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(config_path: &str, json_output: bool) -> Result<ExitCode> {
    let config = PuzzleConfig::from_file(config_path)
        .with_context(|| format!("Failed to load config file: {}", config_path))?;
    let result = config.validate();

    if json_output {
        let output = to_output(config_path, &config, &result);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_human(config_path, &config, &result);
    }

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Converts a validation result into its JSON form.
pub fn to_output(
    config_path: &str,
    config: &PuzzleConfig,
    result: &ValidationResult,
) -> ValidateOutput {
    ValidateOutput {
        ok: result.is_ok(),
        file: config_path.to_string(),
        sequence_length: config.sequence_length(),
        errors: result.errors.iter().map(JsonIssue::from).collect(),
        warnings: result.warnings.iter().map(JsonIssue::from).collect(),
    }
}

fn print_human(config_path: &str, config: &PuzzleConfig, result: &ValidationResult) {
    println!("{} {}", "Validating:".cyan().bold(), config_path);
    println!(
        "{} {} keys, sequence of {}",
        "Puzzle:".dimmed(),
        config.keys.len(),
        config.sequence_length()
    );

    for error in &result.errors {
        println!("  {} {}", "x".red(), error);
    }
    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }

    if result.is_ok() {
        println!("\n{} Config is valid", "SUCCESS".green().bold());
    } else {
        println!(
            "\n{} Config has {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validate_ok_config() {
        let file = write_config(r#"{ "keys": ["A", "B", "C"], "puzzle_length": 2 }"#);
        let code = run(file.path().to_str().unwrap(), true).unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_validate_bad_config_exits_one() {
        let file = write_config(r#"{ "keys": [], "puzzle_length": 0 }"#);
        let code = run(file.path().to_str().unwrap(), false).unwrap();

        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_output_lists_codes() {
        let config = PuzzleConfig::new(["A", "A"], 4);
        let result = config.validate();
        let output = to_output("puzzle.json", &config, &result);

        assert!(!output.ok);
        assert_eq!(output.errors[0].code, "E003");
        assert_eq!(output.warnings[0].code, "W001");
        assert_eq!(output.sequence_length, 2);
    }

    #[test]
    fn test_unparseable_config_is_error() {
        let file = write_config("{ not json");
        assert!(run(file.path().to_str().unwrap(), false).is_err());
    }
}
