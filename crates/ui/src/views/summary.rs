use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::session::Session;
use services::SoundCue;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::map_missed_levels;

/// End-of-session screen. Everything here is derived from the session's
/// result slots on each render; nothing is stored separately.
#[component]
pub fn SummaryScreen(session: Signal<Session>) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let (score, total, rows) = {
        let session = session.read();
        (session.score(), session.len(), map_missed_levels(&session))
    };

    rsx! {
        div { class: "page summary-page",
            h2 { class: "summary-score", "Your Score: {score} / {total}" }
            h3 { class: "summary-heading", "Questions you got wrong:" }
            ul { class: "summary-list",
                if rows.is_empty() {
                    li { class: "summary-perfect", "You got all questions correct! 🎉" }
                }
                for row in rows {
                    li { class: "summary-item",
                        strong { "Level {row.level_number}: " }
                        "{row.prompt}"
                        br {}
                        span { class: "summary-your-answer", "Your answer: {row.your_answer}" }
                        br {}
                        span { class: "summary-correct-answer", "Correct answer: {row.correct_answer}" }
                    }
                }
            }
            div { class: "summary-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let mut session = session;
                        ctx.sounds().play(SoundCue::Click);
                        session.write().reset();
                        let _ = navigator.push(Route::Welcome {});
                    },
                    "Restart Game"
                }
            }
        }
    }
}
