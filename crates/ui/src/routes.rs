use dioxus::prelude::*;
use dioxus_router::{use_navigator, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{GameView, WelcomeView};
use services::SoundCue;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", WelcomeView)] Welcome {},
        #[route("/play", GameView)] Game {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            nav { class: "navbar",
                Brand {}
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

/// Logo + title; clicking it abandons the session and returns home
/// (the game view's state lives under `/play`, so leaving discards it).
#[component]
fn Brand() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    rsx! {
        button {
            class: "brand",
            r#type: "button",
            aria_label: "Go to home",
            onclick: move |_| {
                ctx.sounds().play(SoundCue::Click);
                let _ = navigator.push(Route::Welcome {});
            },
            span { class: "brand-title", "Match & Learn" }
        }
    }
}
