//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `validate`, `generate` and
//! `replay`.

use keyseq_puzzle::{PuzzleStats, ValidationError, ValidationWarning};
use serde::Serialize;

use crate::session::PressRecord;

/// A structured error or warning in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonIssue {
    /// Stable code (e.g., "E001", "W002")
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&ValidationError> for JsonIssue {
    fn from(error: &ValidationError) -> Self {
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            path: error.path.clone(),
        }
    }
}

impl From<&ValidationWarning> for JsonIssue {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.to_string(),
            message: warning.message.clone(),
            path: warning.path.clone(),
        }
    }
}

/// Output of `validate --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateOutput {
    /// Whether the config has no errors.
    pub ok: bool,
    /// Path of the validated file.
    pub file: String,
    /// Length generated targets will have.
    pub sequence_length: usize,
    /// Validation errors.
    pub errors: Vec<JsonIssue>,
    /// Validation warnings.
    pub warnings: Vec<JsonIssue>,
}

/// One previewed round in `generate --json`.
#[derive(Debug, Clone, Serialize)]
pub struct RoundOutput {
    /// Round number, starting at 1.
    pub round: u64,
    /// Target sequence for the round.
    pub sequence: Vec<String>,
}

/// Output of `generate --json`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutput {
    /// Base seed the rounds were derived from.
    pub seed: u32,
    /// Previewed rounds.
    pub rounds: Vec<RoundOutput>,
}

/// Output of `replay --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayOutput {
    /// Base seed of the replayed session.
    pub seed: u32,
    /// Length of every target.
    pub sequence_length: usize,
    /// Target of round 1, present with `--reveal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_target: Option<Vec<String>>,
    /// One record per key press, in order.
    pub presses: Vec<PressRecord>,
    /// Counters after the last press.
    pub stats: PuzzleStats,
}
