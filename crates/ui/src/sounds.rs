use dioxus::document::eval;

use services::{FeedbackSounds, SoundCue};

/// Plays notification sounds by injecting a one-shot `Audio` element into the
/// webview. Fire-and-forget: the promise rejection is swallowed, so a missing
/// sound file stays silent.
pub struct EvalSounds {
    asset_base: String,
}

impl EvalSounds {
    #[must_use]
    pub fn new(asset_base: impl Into<String>) -> Self {
        Self {
            asset_base: asset_base.into(),
        }
    }
}

pub(crate) fn play_sound_script(src: &str) -> String {
    format!("new Audio({src:?}).play().catch(() => {{}});")
}

impl FeedbackSounds for EvalSounds {
    fn play(&self, cue: SoundCue) {
        let src = format!("{}sounds/{}", self.asset_base, cue.file_name());
        let _ = eval(&play_sound_script(&src));
    }
}
