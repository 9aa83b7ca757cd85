//! A puzzle session wired to console collaborators.
//!
//! Collaborators registered by the CLI do not print directly. They push
//! [`Effect`]s onto a shared queue that the session drains after every press,
//! so each press is reported together with the effects it caused.

use anyhow::{Context, Result};
use colored::Colorize;
use keyseq_puzzle::{Outcome, PuzzleConfig, PuzzleController};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// A side effect requested by the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// The scare effect fired.
    Scare,
    /// The success sound played.
    SuccessSound,
    /// The reward was revealed.
    RewardShown,
    /// The reward was hidden.
    RewardHidden,
}

impl Effect {
    /// Console text for the effect.
    pub fn describe(&self) -> &'static str {
        match self {
            Effect::Scare => "the lights flicker and something screams",
            Effect::SuccessSound => "a bright chord rings out",
            Effect::RewardShown => "a hidden compartment opens",
            Effect::RewardHidden => "the compartment is closed",
        }
    }
}

/// Shared queue the console collaborators write into.
#[derive(Debug, Clone, Default)]
pub struct EffectQueue(Rc<RefCell<Vec<Effect>>>);

impl EffectQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, effect: Effect) {
        self.0.borrow_mut().push(effect);
    }

    /// Removes and returns every queued effect.
    pub fn drain(&self) -> Vec<Effect> {
        self.0.borrow_mut().drain(..).collect()
    }
}

/// Outcome of one press plus what it caused.
#[derive(Debug, Clone, Serialize)]
pub struct PressRecord {
    /// The key that was pressed.
    pub key: String,
    /// How the controller judged it.
    pub outcome: Outcome,
    /// Round number after the press.
    pub round: u64,
    /// Correct keys entered in the current attempt after the press.
    pub progress: usize,
    /// Target length.
    pub length: usize,
    /// Effects fired during the press.
    pub effects: Vec<Effect>,
    /// The new target, when revealing is enabled and the press armed one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_target: Option<Vec<String>>,
}

impl PressRecord {
    /// Formats the record for the console.
    pub fn to_human(&self) -> String {
        let outcome = match self.outcome {
            Outcome::InProgress => format!(
                "{} ({}/{})",
                "correct".green(),
                self.progress,
                self.length
            ),
            Outcome::Mismatch => format!("{} - start over", "wrong".red().bold()),
            Outcome::Solved => format!("{} - new sequence armed", "solved".green().bold()),
            Outcome::Reset => format!("{} - input discarded", "reset".yellow()),
        };

        let mut text = format!("{} {} {}", self.key.bold(), "->".dimmed(), outcome);
        for effect in &self.effects {
            text.push_str(&format!("\n  {} {}", "*".magenta(), effect.describe()));
        }
        if let Some(ref target) = self.next_target {
            let label = format!("Target (round {}):", self.round);
            text.push_str(&format!("\n  {} {}", label.as_str().dimmed(), target.join(" ")));
        }
        text
    }
}

/// A controller plus the queue its collaborators report into.
#[derive(Debug)]
pub struct Session {
    controller: PuzzleController,
    effects: EffectQueue,
    reveal: bool,
}

impl Session {
    /// Builds the controller with console collaborators.
    ///
    /// # Arguments
    /// * `config` - Puzzle configuration
    /// * `seed` - Seed override; falls back to the configured seed
    /// * `reveal` - Whether new targets are attached to press records
    pub fn start(config: PuzzleConfig, seed: Option<u32>, reveal: bool) -> Result<Self> {
        let effects = EffectQueue::new();
        let scare = effects.clone();
        let sound = effects.clone();
        let reward = effects.clone();

        let mut builder = PuzzleController::builder(config)
            .scare_effect(move || scare.push(Effect::Scare))
            .success_sound(move || sound.push(Effect::SuccessSound))
            .reward(move |visible: bool| {
                reward.push(if visible {
                    Effect::RewardShown
                } else {
                    Effect::RewardHidden
                })
            });
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        let controller = builder.build().context("Failed to set up puzzle")?;

        // The reward is hidden during setup; nothing to report for that.
        effects.drain();

        Ok(Self {
            controller,
            effects,
            reveal,
        })
    }

    /// Submits one key press.
    pub fn press(&mut self, key: &str) -> PressRecord {
        let outcome = self.controller.submit_key_press(key);
        let next_target = (self.reveal && outcome == Outcome::Solved)
            .then(|| self.controller.target_sequence().to_vec());

        PressRecord {
            key: key.to_string(),
            outcome,
            round: self.controller.round(),
            progress: self.controller.player_input().len(),
            length: self.controller.sequence_length(),
            effects: self.effects.drain(),
            next_target,
        }
    }

    /// The underlying controller.
    pub fn controller(&self) -> &PuzzleController {
        &self.controller
    }

    /// Whether new targets are revealed.
    pub fn reveals(&self) -> bool {
        self.reveal
    }
}
