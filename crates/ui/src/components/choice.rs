use dioxus::prelude::*;

use quiz_core::exercise::ChoiceAttempt;
use quiz_core::model::{AttemptResult, ChoiceLevel};
use services::SoundCue;

use crate::context::AppContext;

/// Multiple choice: clicking an option selects and submits it in one step,
/// mirroring how the exercise plays. After that the buttons only show the
/// verdict.
#[component]
pub fn ChoiceExercise(
    level: ChoiceLevel,
    prior: Option<AttemptResult>,
    on_answer: EventHandler<AttemptResult>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let mut attempt = use_signal({
        let level = level.clone();
        move || ChoiceAttempt::new(level, prior.as_ref())
    });

    let sentence = attempt.read().display_sentence();
    let submitted = attempt.read().is_submitted();
    let selected = attempt.read().selected().map(str::to_string);
    let verdict = attempt.read().verdict();

    rsx! {
        div { class: "exercise exercise--choice",
            p { class: "exercise-sentence", "{sentence}" }
            div { class: "option-row",
                for option in level.options.iter().cloned() {
                    button {
                        class: option_class(&option, &level, selected.as_deref(), verdict),
                        r#type: "button",
                        disabled: submitted,
                        onclick: {
                            let ctx = ctx.clone();
                            let option = option.clone();
                            move |_| {
                                let mut attempt = attempt.write();
                                if attempt.select(&option).is_err() {
                                    return;
                                }
                                if let Ok(result) = attempt.submit() {
                                    ctx.sounds().play(SoundCue::for_verdict(result.is_correct));
                                    on_answer.call(result);
                                }
                            }
                        },
                        "{option}"
                    }
                }
            }
            if let Some(is_correct) = verdict {
                p { class: "exercise-feedback",
                    if is_correct {
                        "✅ Correct!"
                    } else {
                        "❌ Try Again"
                    }
                }
            }
        }
    }
}

fn option_class(
    option: &str,
    level: &ChoiceLevel,
    selected: Option<&str>,
    verdict: Option<bool>,
) -> String {
    let mut class = String::from("btn option-btn");
    if verdict.is_some() {
        if option == level.correct_answer {
            class.push_str(" option-btn--correct");
        } else if selected == Some(option) {
            class.push_str(" option-btn--wrong");
        }
    }
    class
}
