//! KeySeq Puzzle Core
//!
//! This crate implements the key-sequence puzzle used by KeySeq hosts: the
//! game draws a random sequence of musical keys, the player presses keys one
//! at a time, and every press is checked against the target prefix.
//!
//! # Overview
//!
//! - A wrong press resets the attempt, fires the scare effect once, and keeps
//!   the same target.
//! - Completing the target plays the success sound, reveals the reward, and
//!   arms a new target.
//! - A press arriving with the input already full is discarded and the
//!   attempt reset.
//!
//! # Determinism
//!
//! Targets are drawn with PCG32. Each round's seed is derived from the base
//! seed with BLAKE3, so the same configuration and seed always produce the
//! same sequence of targets.
//!
//! # Example
//!
//! ```
//! use keyseq_puzzle::{Outcome, PuzzleConfig, PuzzleController};
//!
//! let config = PuzzleConfig::new(["C4", "D4", "E4", "F4", "G4"], 3).with_seed(42);
//! let mut puzzle = PuzzleController::builder(config)
//!     .success_sound(|| println!("ding"))
//!     .build()?;
//!
//! let target = puzzle.target_sequence().to_vec();
//! assert_eq!(puzzle.submit_key_press(&target[0]), Outcome::InProgress);
//! assert_eq!(puzzle.submit_key_press(&target[1]), Outcome::InProgress);
//! assert_eq!(puzzle.submit_key_press(&target[2]), Outcome::Solved);
//! # Ok::<(), keyseq_puzzle::PuzzleError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`controller`] - The puzzle state machine and its builder
//! - [`config`] - Configuration loading and validation
//! - [`notify`] - Collaborator traits (scare effect, success sound, reward)
//! - [`sequence`] - Target generation and prefix matching
//! - [`rng`] - Deterministic RNG with per-round seed derivation
//! - [`error`] - Error and validation types

pub mod config;
pub mod controller;
pub mod error;
pub mod notify;
pub mod rng;
pub mod sequence;

// Re-export main types at crate root
pub use config::{PuzzleConfig, DEFAULT_KEYS, DEFAULT_PUZZLE_LENGTH};
pub use controller::{preview_rounds, Outcome, PuzzleBuilder, PuzzleController, PuzzleStats};
pub use error::{
    ErrorCode, PuzzleError, PuzzleResult, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use notify::{Reward, ScareEffect, SequenceObserver, SuccessSound};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
