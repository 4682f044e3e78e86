use dioxus::prelude::*;

use quiz_core::model::AttemptResult;
use quiz_core::session::Session;
use services::SoundCue;

use crate::components::ExerciseEngine;
use crate::context::AppContext;
use crate::views::SummaryScreen;
use crate::vm::score_label;

/// The playing screen: owns the [`Session`] for its lifetime. Navigating away
/// from `/play` drops the component and with it every recorded answer, which
/// is exactly the "return home" contract.
#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let session = use_signal(move || Session::new(catalog));

    let (active_index, total, score, has_answered, nonce, level, prior) = {
        let session = session.read();
        (
            session.active_index(),
            session.len(),
            session.score(),
            session.has_answered_active(),
            session.remount_nonce(),
            session.active_level().cloned(),
            session.result(session.active_index()).cloned(),
        )
    };

    if active_index == total {
        return rsx! {
            SummaryScreen { session }
        };
    }

    let image_url = level
        .as_ref()
        .and_then(|level| level.image.as_deref())
        .map(|image| ctx.asset_url(image));
    let is_first = active_index == 0;
    let is_last = active_index + 1 == total;
    let progress_label = format!("Level {} of {total}", active_index + 1);
    let score_text = score_label(score, total);

    let on_answer = {
        let mut session = session;
        move |result: AttemptResult| {
            session.write().record_answer(result);
        }
    };
    let on_prev = {
        let ctx = ctx.clone();
        let mut session = session;
        move |_| {
            ctx.sounds().play(SoundCue::Click);
            session.write().retreat();
        }
    };
    let on_restart = {
        let ctx = ctx.clone();
        let mut session = session;
        move |_| {
            ctx.sounds().play(SoundCue::Click);
            session.write().restart_current();
        }
    };
    let on_next = {
        let ctx = ctx.clone();
        let mut session = session;
        move |_| {
            ctx.sounds().play(SoundCue::Click);
            session.write().advance();
        }
    };

    rsx! {
        div { class: "page game-page",
            header { class: "game-header",
                span { class: "game-progress", "{progress_label}" }
                span { class: "game-score", "{score_text}" }
            }
            if let Some(url) = image_url {
                img {
                    class: "level-image",
                    src: "{url}",
                    alt: "Level",
                }
            }
            if let Some(level) = level {
                div { class: "level-card",
                    ExerciseEngine {
                        key: "{nonce}-{active_index}",
                        level,
                        prior,
                        on_answer,
                    }
                }
            }
            div { class: "game-nav",
                button {
                    class: "btn nav-btn",
                    r#type: "button",
                    disabled: is_first,
                    onclick: on_prev,
                    "Previous"
                }
                button {
                    class: "btn nav-btn",
                    r#type: "button",
                    onclick: on_restart,
                    "Restart"
                }
                // Forward navigation is gated here, not in the controller:
                // the current level needs a result before moving on.
                button {
                    class: "btn nav-btn",
                    r#type: "button",
                    disabled: !has_answered,
                    onclick: on_next,
                    "Next"
                }
            }
            if is_last {
                p { class: "game-finish", "🎉 You finished all the levels! 🎉" }
            }
        }
    }
}
