//! Puzzle configuration and its validation.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{
    ErrorCode, PuzzleResult, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
use crate::sequence::effective_length;

/// Default number of keys in a target sequence.
pub const DEFAULT_PUZZLE_LENGTH: usize = 5;

/// The white keys of a 16-key practice keyboard, C4 through D6.
pub const DEFAULT_KEYS: [&str; 16] = [
    "C4", "D4", "E4", "F4", "G4", "A4", "B4", "C5", "D5", "E5", "F5", "G5", "A5", "B5", "C6",
    "D6",
];

/// Configuration for a [`crate::PuzzleController`].
///
/// Set once before the first key press. Any field missing from JSON takes
/// its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PuzzleConfig {
    /// Candidate key identifiers, in order. Must be distinct.
    pub keys: Vec<String>,

    /// Requested target length. Clamped to `keys.len()`.
    pub puzzle_length: usize,

    /// Base seed for target generation. A random seed is used when absent.
    pub seed: Option<u32>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            keys: DEFAULT_KEYS.iter().map(|k| k.to_string()).collect(),
            puzzle_length: DEFAULT_PUZZLE_LENGTH,
            seed: None,
        }
    }
}

impl PuzzleConfig {
    /// Creates a configuration from a key set and a puzzle length.
    pub fn new<I, S>(keys: I, puzzle_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            puzzle_length,
            seed: None,
        }
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> PuzzleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> PuzzleResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Length every generated target will have.
    pub fn sequence_length(&self) -> usize {
        effective_length(self.puzzle_length, self.keys.len())
    }

    /// Validates the configuration.
    ///
    /// An empty key set and a zero length are errors. A length larger than
    /// the key set is only a warning, since generation clamps it.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::success();

        if self.keys.is_empty() {
            result.add_error(ValidationError::with_path(
                ErrorCode::EmptyKeySet,
                "key set is empty; at least one key is required",
                "keys",
            ));
        }

        if self.puzzle_length == 0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::ZeroPuzzleLength,
                "puzzle_length must be positive",
                "puzzle_length",
            ));
        }

        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        for (i, key) in self.keys.iter().enumerate() {
            if key.trim().is_empty() {
                result.add_error(ValidationError::with_path(
                    ErrorCode::BlankKey,
                    "key identifier is blank",
                    format!("keys[{}]", i),
                ));
                continue;
            }
            match first_seen.entry(key.as_str()) {
                Entry::Occupied(first) => {
                    result.add_error(ValidationError::with_path(
                        ErrorCode::DuplicateKey,
                        format!("duplicate key '{}' (first at keys[{}])", key, first.get()),
                        format!("keys[{}]", i),
                    ));
                }
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
            }
        }

        if !self.keys.is_empty() && self.puzzle_length > self.keys.len() {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::LengthClamped,
                format!(
                    "puzzle_length {} exceeds the {} available keys; sequences will have {} keys",
                    self.puzzle_length,
                    self.keys.len(),
                    self.keys.len()
                ),
                "puzzle_length",
            ));
        }

        result
    }
}
