//! Configuration loading for CLI commands.

use anyhow::{Context, Result};
use keyseq_puzzle::PuzzleConfig;
use std::path::Path;

/// Loads the puzzle configuration.
///
/// Without a path the stock 16-key configuration is used.
///
/// # Arguments
/// * `path` - Optional path to a JSON configuration file
pub fn load_config(path: Option<&str>) -> Result<PuzzleConfig> {
    match path {
        Some(path) => PuzzleConfig::from_file(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path)),
        None => Ok(PuzzleConfig::default()),
    }
}
