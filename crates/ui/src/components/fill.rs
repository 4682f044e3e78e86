use dioxus::prelude::*;

use quiz_core::exercise::FillAttempt;
use quiz_core::model::{AttemptResult, FillLevel};
use services::SoundCue;

use crate::context::AppContext;

#[component]
pub fn FillExercise(
    level: FillLevel,
    prior: Option<AttemptResult>,
    on_answer: EventHandler<AttemptResult>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let mut attempt = use_signal(move || FillAttempt::new(level, prior.as_ref()));

    let sentence = attempt.read().display_sentence();
    let submitted = attempt.read().is_submitted();
    let input = attempt.read().input().to_string();
    let can_check = !submitted && attempt.read().is_complete();
    let verdict = attempt.read().verdict();

    rsx! {
        div { class: "exercise exercise--fill",
            p { class: "exercise-sentence", "{sentence}" }
            if !submitted {
                input {
                    class: "fill-input",
                    r#type: "text",
                    placeholder: "Type the missing word",
                    value: "{input}",
                    oninput: move |evt| {
                        let _ = attempt.write().set_input(evt.value());
                    },
                }
                button {
                    class: "btn btn-primary check-btn",
                    r#type: "button",
                    disabled: !can_check,
                    onclick: {
                        let ctx = ctx.clone();
                        move |_| {
                            if let Ok(result) = attempt.write().submit() {
                                ctx.sounds().play(SoundCue::for_verdict(result.is_correct));
                                on_answer.call(result);
                            }
                        }
                    },
                    "Check"
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
