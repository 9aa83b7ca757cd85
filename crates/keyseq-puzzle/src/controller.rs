//! The puzzle state machine.
//!
//! A [`PuzzleController`] rests in a single state, awaiting input, with a
//! target sequence and a (possibly empty) matching prefix of player input.
//! Each call to [`PuzzleController::submit_key_press`] runs to completion:
//! a mismatch resets the attempt, a completed sequence notifies the success
//! collaborators and arms a fresh target, and neither outcome is left
//! standing once the call returns.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::PuzzleConfig;
use crate::error::{PuzzleError, PuzzleResult, ValidationWarning, WarningCode};
use crate::notify::{Collaborators, Reward, ScareEffect, SequenceObserver, SuccessSound};
use crate::rng::{create_round_rng, random_base_seed};
use crate::sequence::{effective_length, generate_sequence, is_prefix_match};

/// Result of a single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The press extended a correct prefix; more input is expected.
    InProgress,
    /// The press did not match the target. The attempt was reset and the
    /// target kept.
    Mismatch,
    /// The press completed the target. A new target was generated and the
    /// attempt reset.
    Solved,
    /// The press arrived with the input already full. It was discarded and
    /// the attempt reset.
    Reset,
}

impl Outcome {
    /// Returns the outcome as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::InProgress => "in_progress",
            Outcome::Mismatch => "mismatch",
            Outcome::Solved => "solved",
            Outcome::Reset => "reset",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Counters kept for the lifetime of a controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PuzzleStats {
    /// Calls to `submit_key_press`.
    pub presses: u64,
    /// Completed sequences.
    pub solves: u64,
    /// Presses that broke the prefix.
    pub mismatches: u64,
    /// Presses discarded by the overflow guard.
    pub overflow_resets: u64,
    /// Scare effects actually fired.
    pub scares_triggered: u64,
    /// Target sequences generated, including the initial one.
    pub rounds_generated: u64,
}

/// Builder registering collaborators before the first target is generated.
pub struct PuzzleBuilder {
    config: PuzzleConfig,
    seed: Option<u32>,
    collaborators: Collaborators,
}

impl PuzzleBuilder {
    /// Creates a builder for the given configuration.
    pub fn new(config: PuzzleConfig) -> Self {
        Self {
            config,
            seed: None,
            collaborators: Collaborators::default(),
        }
    }

    /// Overrides the base seed, taking precedence over the configured one.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Registers the effect fired on a mismatch.
    pub fn scare_effect(mut self, scare: impl ScareEffect + 'static) -> Self {
        self.collaborators.scare = Some(Box::new(scare));
        self
    }

    /// Registers the sound played on a solve.
    pub fn success_sound(mut self, sound: impl SuccessSound + 'static) -> Self {
        self.collaborators.success_sound = Some(Box::new(sound));
        self
    }

    /// Registers the reward revealed on a solve.
    pub fn reward(mut self, reward: impl Reward + 'static) -> Self {
        self.collaborators.reward = Some(Box::new(reward));
        self
    }

    /// Registers a diagnostic observer for generated targets.
    pub fn sequence_observer(mut self, observer: impl SequenceObserver + 'static) -> Self {
        self.collaborators.observer = Some(Box::new(observer));
        self
    }

    /// Validates the configuration and builds the controller.
    ///
    /// Hides the reward and generates the first target. Missing collaborators
    /// are reported as warnings, not errors.
    pub fn build(self) -> PuzzleResult<PuzzleController> {
        let PuzzleBuilder {
            config,
            seed,
            mut collaborators,
        } = self;

        let mut warnings = config
            .validate()
            .into_result()
            .map_err(PuzzleError::InvalidConfig)?;

        if !collaborators.has_scare_effect() {
            warnings.push(ValidationWarning::new(
                WarningCode::MissingScareEffect,
                "scare effect is not assigned",
            ));
        }
        if !collaborators.has_success_sound() {
            warnings.push(ValidationWarning::new(
                WarningCode::MissingSuccessSound,
                "success sound is not assigned",
            ));
        }
        if !collaborators.has_reward() {
            warnings.push(ValidationWarning::new(
                WarningCode::MissingReward,
                "reward is not assigned",
            ));
        }
        for warning in &warnings {
            warn!(code = %warning.code, "{}", warning.message);
        }

        collaborators.hide_reward();

        let base_seed = seed.or(config.seed).unwrap_or_else(random_base_seed);
        debug!(base_seed, "puzzle controller initialized");

        let mut controller = PuzzleController {
            keys: config.keys,
            puzzle_length: config.puzzle_length,
            base_seed,
            round: 0,
            target: Vec::new(),
            input: Vec::new(),
            scare_latched: false,
            collaborators,
            stats: PuzzleStats::default(),
            warnings,
        };
        controller.generate_sequence();

        Ok(controller)
    }
}

/// Key-sequence puzzle state machine.
#[derive(Debug)]
pub struct PuzzleController {
    keys: Vec<String>,
    puzzle_length: usize,
    base_seed: u32,
    round: u64,
    target: Vec<String>,
    input: Vec<String>,
    scare_latched: bool,
    collaborators: Collaborators,
    stats: PuzzleStats,
    warnings: Vec<ValidationWarning>,
}

impl PuzzleController {
    /// Starts building a controller for the given configuration.
    pub fn builder(config: PuzzleConfig) -> PuzzleBuilder {
        PuzzleBuilder::new(config)
    }

    /// Builds a controller with no collaborators.
    pub fn new(config: PuzzleConfig) -> PuzzleResult<Self> {
        PuzzleBuilder::new(config).build()
    }

    /// Handles one key press.
    ///
    /// `key_id` need not belong to the key set; an unknown key is simply a
    /// mismatch.
    pub fn submit_key_press(&mut self, key_id: impl Into<String>) -> Outcome {
        let key_id = key_id.into();
        self.stats.presses += 1;

        if self.input.len() >= self.target.len() {
            warn!(
                pressed = self.input.len(),
                expected = self.target.len(),
                "player input exceeds the expected sequence length; resetting puzzle"
            );
            self.stats.overflow_resets += 1;
            self.reset();
            return Outcome::Reset;
        }

        debug!(key = %key_id, position = self.input.len(), "key pressed");
        self.input.push(key_id);

        if !is_prefix_match(&self.input, &self.target) {
            self.stats.mismatches += 1;
            self.trigger_scare();
            self.reset();
            return Outcome::Mismatch;
        }

        if self.input.len() == self.target.len() {
            self.solve();
            return Outcome::Solved;
        }

        Outcome::InProgress
    }

    /// Discards the current attempt and arms a new target.
    ///
    /// The reward is left as it is.
    pub fn new_round(&mut self) {
        self.generate_sequence();
        self.reset();
    }

    /// The current target. Intended for debugging and tests only.
    pub fn target_sequence(&self) -> &[String] {
        &self.target
    }

    /// Keys pressed so far in the current attempt.
    pub fn player_input(&self) -> &[String] {
        &self.input
    }

    /// The key that would extend the current prefix, if any.
    pub fn expected_key(&self) -> Option<&str> {
        self.target.get(self.input.len()).map(String::as_str)
    }

    /// Whether the scare effect already fired in the current attempt.
    pub fn is_scare_latched(&self) -> bool {
        self.scare_latched
    }

    /// The configured key set.
    pub fn key_set(&self) -> &[String] {
        &self.keys
    }

    /// Length of every target this controller generates.
    pub fn sequence_length(&self) -> usize {
        effective_length(self.puzzle_length, self.keys.len())
    }

    /// The base seed every round seed is derived from.
    pub fn base_seed(&self) -> u32 {
        self.base_seed
    }

    /// Number of the current round, starting at 1.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Lifetime counters.
    pub fn stats(&self) -> PuzzleStats {
        self.stats
    }

    /// Warnings recorded while the controller was built.
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    fn generate_sequence(&mut self) {
        self.round += 1;
        let mut rng = create_round_rng(self.base_seed, self.round);
        self.target = generate_sequence(&self.keys, self.puzzle_length, &mut rng);
        self.stats.rounds_generated += 1;

        debug!(
            round = self.round,
            sequence = %self.target.join(", "),
            "generated target sequence"
        );
        self.collaborators.sequence_generated(self.round, &self.target);
    }

    fn trigger_scare(&mut self) {
        if self.scare_latched {
            return;
        }
        if self.collaborators.scare() {
            self.scare_latched = true;
            self.stats.scares_triggered += 1;
            info!(round = self.round, "wrong sequence; scare effect triggered");
        }
    }

    fn solve(&mut self) {
        info!(round = self.round, "puzzle solved");
        self.stats.solves += 1;
        self.collaborators.solved();
        self.generate_sequence();
        self.reset();
    }

    fn reset(&mut self) {
        self.input.clear();
        self.scare_latched = false;
        debug!("puzzle reset; ready for new input");
    }
}

/// Previews the targets a seed produces for rounds `1..=rounds`.
///
/// Matches what a [`PuzzleController`] built with the same configuration and
/// seed generates as it is solved round after round.
pub fn preview_rounds(
    config: &PuzzleConfig,
    base_seed: u32,
    rounds: u64,
) -> PuzzleResult<Vec<Vec<String>>> {
    config
        .validate()
        .into_result()
        .map_err(PuzzleError::InvalidConfig)?;

    Ok((1..=rounds)
        .map(|round| {
            let mut rng = create_round_rng(base_seed, round);
            generate_sequence(&config.keys, config.puzzle_length, &mut rng)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    fn abcde(length: usize) -> PuzzleConfig {
        PuzzleConfig::new(["A", "B", "C", "D", "E"], length).with_seed(42)
    }

    fn wrong_key(controller: &PuzzleController) -> String {
        let expected = controller.expected_key().unwrap().to_string();
        controller
            .key_set()
            .iter()
            .find(|k| **k != expected)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_initial_state() {
        let controller = PuzzleController::new(abcde(3)).unwrap();

        assert_eq!(controller.round(), 1);
        assert_eq!(controller.target_sequence().len(), 3);
        assert!(controller.player_input().is_empty());
        assert!(!controller.is_scare_latched());
        assert_eq!(controller.stats().rounds_generated, 1);
    }

    #[test]
    fn test_missing_collaborators_are_warnings() {
        let controller = PuzzleController::new(abcde(3)).unwrap();
        let codes: Vec<_> = controller.warnings().iter().map(|w| w.code).collect();

        assert_eq!(
            codes,
            vec![
                WarningCode::MissingScareEffect,
                WarningCode::MissingSuccessSound,
                WarningCode::MissingReward,
            ]
        );
    }

    #[test]
    fn test_empty_key_set_is_rejected() {
        let err = PuzzleController::new(PuzzleConfig::new(Vec::<String>::new(), 3)).unwrap_err();

        assert_eq!(err.validation_errors()[0].code, ErrorCode::EmptyKeySet);
    }

    #[test]
    fn test_builder_seed_overrides_config_seed() {
        let controller = PuzzleController::builder(abcde(3)).seed(7).build().unwrap();
        assert_eq!(controller.base_seed(), 7);

        let controller = PuzzleController::new(abcde(3)).unwrap();
        assert_eq!(controller.base_seed(), 42);
    }

    #[test]
    fn test_full_sequence_solves() {
        let mut controller = PuzzleController::new(abcde(3)).unwrap();
        let target = controller.target_sequence().to_vec();

        assert_eq!(controller.submit_key_press(&target[0]), Outcome::InProgress);
        assert_eq!(controller.submit_key_press(&target[1]), Outcome::InProgress);
        assert_eq!(controller.submit_key_press(&target[2]), Outcome::Solved);

        assert!(controller.player_input().is_empty());
        assert_eq!(controller.round(), 2);
        assert_eq!(controller.target_sequence().len(), 3);
        assert_eq!(controller.stats().solves, 1);
    }

    #[test]
    fn test_mismatch_keeps_target() {
        let mut controller = PuzzleController::new(abcde(3)).unwrap();
        let target = controller.target_sequence().to_vec();

        assert_eq!(controller.submit_key_press(&target[0]), Outcome::InProgress);
        let wrong = wrong_key(&controller);
        assert_eq!(controller.submit_key_press(wrong), Outcome::Mismatch);

        assert!(controller.player_input().is_empty());
        assert_eq!(controller.target_sequence(), target.as_slice());
        assert_eq!(controller.round(), 1);
    }

    #[test]
    fn test_unknown_key_is_mismatch() {
        let mut controller = PuzzleController::new(abcde(3)).unwrap();
        assert_eq!(controller.submit_key_press("Z"), Outcome::Mismatch);
    }

    #[test]
    fn test_overflow_guard_resets() {
        let mut controller = PuzzleController::new(abcde(3)).unwrap();
        controller.input = controller.target.clone();
        controller.scare_latched = true;

        assert_eq!(controller.submit_key_press("E"), Outcome::Reset);
        assert!(controller.player_input().is_empty());
        assert!(!controller.is_scare_latched());
        assert_eq!(controller.stats().overflow_resets, 1);
        assert_eq!(controller.round(), 1);
    }

    #[test]
    fn test_scare_fires_once_per_mismatch() {
        let scares = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&scares);
        let mut controller = PuzzleController::builder(abcde(3))
            .scare_effect(move || counter.set(counter.get() + 1))
            .build()
            .unwrap();

        for expected_scares in 1..=3 {
            let wrong = wrong_key(&controller);
            assert_eq!(controller.submit_key_press(wrong), Outcome::Mismatch);
            assert_eq!(scares.get(), expected_scares);
            assert!(!controller.is_scare_latched());
        }
        assert_eq!(controller.stats().scares_triggered, 3);
    }

    #[test]
    fn test_scare_latch_blocks_second_trigger() {
        let scares = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&scares);
        let mut controller = PuzzleController::builder(abcde(3))
            .scare_effect(move || counter.set(counter.get() + 1))
            .build()
            .unwrap();

        controller.scare_latched = true;
        controller.trigger_scare();
        assert_eq!(scares.get(), 0);

        controller.reset();
        controller.trigger_scare();
        assert_eq!(scares.get(), 1);
        assert!(controller.is_scare_latched());
    }

    #[test]
    fn test_latch_stays_clear_without_scare_effect() {
        let mut controller = PuzzleController::new(abcde(3)).unwrap();
        controller.trigger_scare();

        assert!(!controller.is_scare_latched());
        assert_eq!(controller.stats().scares_triggered, 0);
    }

    #[test]
    fn test_new_round_discards_attempt() {
        let mut controller = PuzzleController::new(abcde(3)).unwrap();
        let first = controller.target_sequence()[0].clone();
        controller.submit_key_press(first);

        controller.new_round();

        assert!(controller.player_input().is_empty());
        assert_eq!(controller.round(), 2);
    }

    #[test]
    fn test_preview_matches_controller_rounds() {
        let config = abcde(4);
        let preview = preview_rounds(&config, 42, 3).unwrap();
        let mut controller = PuzzleController::new(config).unwrap();

        for expected in &preview {
            assert_eq!(controller.target_sequence(), expected.as_slice());
            for key in expected {
                controller.submit_key_press(key.as_str());
            }
        }
        assert_eq!(controller.stats().solves, 3);
    }

    #[test]
    fn test_outcome_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Outcome::InProgress).unwrap(),
            r#""in_progress""#
        );
        assert_eq!(Outcome::Solved.to_string(), "solved");
    }
}
