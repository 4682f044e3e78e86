use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::gate::EntryGate;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn WelcomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let gate = ctx.entry_gate();
    let mut code = use_signal(String::new);
    let mut code_error = use_signal(|| None::<&'static str>);

    let can_start = code().len() == 3;

    rsx! {
        div { class: "page welcome-page",
            h1 { class: "welcome-title", "Welcome to Match & Learn!" }
            p { class: "welcome-intro",
                "Practice building sentences step by step."
                br {}
                "Enter the 3-digit code to start learning!"
            }
            input {
                class: "code-input",
                r#type: "text",
                inputmode: "numeric",
                maxlength: "3",
                placeholder: "_ _ _",
                value: "{code()}",
                oninput: move |evt| {
                    code.set(EntryGate::sanitize_input(&evt.value()));
                    code_error.set(None);
                },
            }
            button {
                class: "btn btn-primary start-btn",
                r#type: "button",
                disabled: !can_start,
                onclick: move |_| {
                    if gate.verify(&code()) {
                        code_error.set(None);
                        let _ = navigator.push(Route::Game {});
                    } else {
                        code_error.set(Some("Incorrect code. Please try again."));
                    }
                },
                "Start Game"
            }
            if let Some(message) = code_error() {
                p { class: "code-error", "{message}" }
            }
        }
    }
}
