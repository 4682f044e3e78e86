//! Audio feedback port.
//!
//! The exercise flow plays short notification sounds as a side effect of user
//! actions. Playback is fire-and-forget: nothing awaits it, ordering does not
//! matter, and failures are silently ignored. Keeping it behind a trait keeps
//! the state machines and views testable without audio hardware.

/// Which sound to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Navigation button press.
    Click,
    /// Correct submission.
    Correct,
    /// Incorrect submission.
    Incorrect,
}

impl SoundCue {
    #[must_use]
    pub fn for_verdict(is_correct: bool) -> Self {
        if is_correct {
            SoundCue::Correct
        } else {
            SoundCue::Incorrect
        }
    }

    /// Sound file under the asset base's `sounds/` directory.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            SoundCue::Click => "click.mp3",
            SoundCue::Correct => "good_job.mp3",
            SoundCue::Incorrect => "try_again.mp3",
        }
    }
}

pub trait FeedbackSounds: Send + Sync {
    fn play(&self, cue: SoundCue);
}

/// Silent implementation for tests and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFeedback;

impl FeedbackSounds for NullFeedback {
    fn play(&self, _cue: SoundCue) {}
}
