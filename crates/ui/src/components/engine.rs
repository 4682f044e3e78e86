use dioxus::prelude::*;

use quiz_core::model::{AttemptResult, LevelDefinition, LevelKind};

use crate::components::{AssemblyExercise, ChoiceExercise, FillExercise};

/// Pure dispatch from the level's type discriminator to the matching
/// renderer, pre-seeded with the prior result when the level was already
/// answered. An unrecognized type degrades to a placeholder instead of
/// failing the session.
#[component]
pub fn ExerciseEngine(
    level: LevelDefinition,
    prior: Option<AttemptResult>,
    on_answer: EventHandler<AttemptResult>,
) -> Element {
    match level.kind {
        LevelKind::Choice(level) => rsx! {
            ChoiceExercise { level, prior, on_answer }
        },
        LevelKind::Assembly(level) => rsx! {
            AssemblyExercise { level, prior, on_answer }
        },
        LevelKind::Fill(level) => rsx! {
            FillExercise { level, prior, on_answer }
        },
        LevelKind::Unknown => rsx! {
            div { class: "exercise exercise--unknown", "Unknown level type" }
        },
    }
}
