use dioxus::prelude::*;

use quiz_core::exercise::AssemblyAttempt;
use quiz_core::model::prompt::{self, Segment};
use quiz_core::model::{AssemblyLevel, AttemptResult};
use services::SoundCue;

use crate::context::AppContext;

/// Drag-and-drop sentence assembly. Token chips are dragged into blank slots;
/// dropping a chip that already sits in another slot moves it there. Chips
/// disappear once the attempt is submitted.
#[component]
pub fn AssemblyExercise(
    level: AssemblyLevel,
    prior: Option<AttemptResult>,
    on_answer: EventHandler<AttemptResult>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let mut attempt = use_signal({
        let level = level.clone();
        move || AssemblyAttempt::new(level, prior.as_ref())
    });
    let mut dragging = use_signal(|| None::<String>);

    let submitted = attempt.read().is_submitted();
    let can_check = !submitted && attempt.read().is_complete();
    let verdict = attempt.read().verdict();
    let placed = attempt.read().placed().to_vec();
    let segments = prompt::assembly_segments(&level.sentence_template);

    let mut blank = 0usize;

    rsx! {
        div { class: "exercise exercise--assembly",
            p { class: "exercise-sentence assembly-sentence",
                for segment in segments {
                    match segment {
                        Segment::Text(text) => rsx! {
                            span { class: "assembly-text", "{text}" }
                        },
                        Segment::Blank => {
                            let index = blank;
                            blank += 1;
                            let token = placed.get(index).cloned().flatten();
                            rsx! {
                                span {
                                    class: if token.is_some() { "assembly-slot assembly-slot--filled" } else { "assembly-slot" },
                                    ondragover: move |evt| evt.prevent_default(),
                                    ondrop: move |evt| {
                                        evt.prevent_default();
                                        let dropped = dragging.read().clone();
                                        if let Some(token) = dropped {
                                            let _ = attempt.write().place(index, &token);
                                            dragging.set(None);
                                        }
                                    },
                                    if let Some(token) = token {
                                        "{token}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if !submitted {
                div { class: "token-row",
                    for token in level.draggable_tokens.iter().cloned() {
                        {
                            let used = attempt.read().token_used(&token);
                            rsx! {
                                span {
                                    class: if used { "token-chip token-chip--used" } else { "token-chip" },
                                    draggable: if used { "false" } else { "true" },
                                    ondragstart: {
                                        let token = token.clone();
                                        move |_| dragging.set(Some(token.clone()))
                                    },
                                    "{token}"
                                }
                            }
                        }
                    }
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
