use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::gate::EntryGate;
use quiz_core::model::{AttemptResult, LevelDefinition, SubmittedAnswer};
use quiz_core::{Catalog, Session};
use services::{FeedbackSounds, SoundCue};

use crate::components::ExerciseEngine;
use crate::context::{build_app_context, UiApp};
use crate::views::{GameView, SummaryScreen, WelcomeView};

/// Records every cue instead of playing audio, so tests can assert on the
/// feedback sequence.
#[derive(Default)]
pub struct RecordingSounds {
    played: Mutex<Vec<SoundCue>>,
}

impl RecordingSounds {
    pub fn played(&self) -> Vec<SoundCue> {
        self.played.lock().expect("sound log poisoned").clone()
    }
}

impl FeedbackSounds for RecordingSounds {
    fn play(&self, cue: SoundCue) {
        self.played.lock().expect("sound log poisoned").push(cue);
    }
}

#[derive(Clone)]
struct TestApp {
    catalog: Arc<Catalog>,
    sounds: Arc<RecordingSounds>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn entry_gate(&self) -> EntryGate {
        EntryGate::default()
    }

    fn feedback_sounds(&self) -> Arc<dyn FeedbackSounds> {
        self.sounds.clone()
    }

    fn asset_base(&self) -> String {
        "/assets/".to_string()
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Welcome,
    Game,
    Summary,
    Engine(LevelDefinition),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Welcome => rsx! { WelcomeView {} },
        ViewKind::Game => rsx! { GameView {} },
        ViewKind::Summary => rsx! { SummaryFixture {} },
        ViewKind::Engine(level) => rsx! {
            ExerciseEngine { level, prior: None, on_answer: move |_| {} }
        },
    }
}

/// Seeds a finished session with one wrong answer and shows its summary.
#[component]
fn SummaryFixture() -> Element {
    let ctx = use_context::<crate::context::AppContext>();
    let session = use_signal(move || {
        let mut session = Session::new(ctx.catalog());
        session.record_answer(AttemptResult::new(
            SubmittedAnswer::Text("dog".into()),
            false,
        ));
        session.advance();
        session.record_answer(AttemptResult::new(
            SubmittedAnswer::Text("dog".into()),
            false,
        ));
        session.advance();
        session
    });
    rsx! { SummaryScreen { session } }
}

/// Fill "cat" then choice dog/cat. Every smoke test runs against this.
pub fn sample_catalog() -> Arc<Catalog> {
    let levels: Vec<LevelDefinition> = serde_json::from_str(
        r#"[
            {"type":"fill","sentence":"A ___ says meow.","correctAnswer":"cat"},
            {"type":"choice","sentence":"A ___ barks.","options":["dog","cat"],"correctAnswer":"dog"}
        ]"#,
    )
    .expect("sample levels parse");
    Arc::new(Catalog::new(levels).expect("sample catalog valid"))
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub sounds: Arc<RecordingSounds>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_catalog(view, sample_catalog())
}

pub fn setup_view_harness_with_catalog(view: ViewKind, catalog: Arc<Catalog>) -> ViewHarness {
    let sounds = Arc::new(RecordingSounds::default());
    let app = Arc::new(TestApp {
        catalog,
        sounds: Arc::clone(&sounds),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, sounds }
}
