//! KeySeq CLI library.
//!
//! This crate hosts a [`keyseq_puzzle::PuzzleController`] from the command
//! line: configuration loading, console collaborators, log setup, and the
//! `play`, `replay`, `generate` and `validate` commands.

pub mod commands;
pub mod input;
pub mod logging;
pub mod session;
