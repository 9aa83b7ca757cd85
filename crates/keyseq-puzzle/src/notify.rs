//! Outbound collaborator contracts.
//!
//! The controller never owns audio, visuals or effects. It only notifies the
//! collaborators registered here, and skips any that are absent. Every trait
//! has a blanket impl for a matching closure, so hosts can register either a
//! type or a plain `FnMut`.

/// Failure effect fired on a mismatch, at most once per failed attempt.
pub trait ScareEffect {
    /// Plays the scare.
    fn trigger_scare(&mut self);
}

impl<F: FnMut()> ScareEffect for F {
    fn trigger_scare(&mut self) {
        self()
    }
}

/// Sound played when a sequence is completed.
pub trait SuccessSound {
    /// Plays the success sound.
    fn play(&mut self);
}

impl<F: FnMut()> SuccessSound for F {
    fn play(&mut self) {
        self()
    }
}

/// Reward indicator hidden at setup and revealed on every solve.
pub trait Reward {
    /// Shows or hides the reward.
    fn set_visible(&mut self, visible: bool);
}

impl<F: FnMut(bool)> Reward for F {
    fn set_visible(&mut self, visible: bool) {
        self(visible)
    }
}

/// Diagnostic hook receiving every freshly generated target.
pub trait SequenceObserver {
    /// Called after a new target sequence is generated.
    fn sequence_generated(&mut self, round: u64, sequence: &[String]);
}

impl<F: FnMut(u64, &[String])> SequenceObserver for F {
    fn sequence_generated(&mut self, round: u64, sequence: &[String]) {
        self(round, sequence)
    }
}

/// The set of registered collaborators.
#[derive(Default)]
pub struct Collaborators {
    pub(crate) scare: Option<Box<dyn ScareEffect>>,
    pub(crate) success_sound: Option<Box<dyn SuccessSound>>,
    pub(crate) reward: Option<Box<dyn Reward>>,
    pub(crate) observer: Option<Box<dyn SequenceObserver>>,
}

impl Collaborators {
    /// Returns true when a scare effect is registered.
    pub fn has_scare_effect(&self) -> bool {
        self.scare.is_some()
    }

    /// Returns true when a success sound is registered.
    pub fn has_success_sound(&self) -> bool {
        self.success_sound.is_some()
    }

    /// Returns true when a reward is registered.
    pub fn has_reward(&self) -> bool {
        self.reward.is_some()
    }

    /// Fires the scare effect. Returns whether one was registered.
    pub(crate) fn scare(&mut self) -> bool {
        match self.scare.as_mut() {
            Some(scare) => {
                scare.trigger_scare();
                true
            }
            None => false,
        }
    }

    pub(crate) fn solved(&mut self) {
        if let Some(sound) = self.success_sound.as_mut() {
            sound.play();
        }
        if let Some(reward) = self.reward.as_mut() {
            reward.set_visible(true);
        }
    }

    pub(crate) fn hide_reward(&mut self) {
        if let Some(reward) = self.reward.as_mut() {
            reward.set_visible(false);
        }
    }

    pub(crate) fn sequence_generated(&mut self, round: u64, sequence: &[String]) {
        if let Some(observer) = self.observer.as_mut() {
            observer.sequence_generated(round, sequence);
        }
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("scare", &self.scare.is_some())
            .field("success_sound", &self.success_sound.is_some())
            .field("reward", &self.reward.is_some())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
