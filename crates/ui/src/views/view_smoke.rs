use quiz_core::model::LevelDefinition;

use super::test_harness::{setup_view_harness, ViewKind};

#[tokio::test(flavor = "current_thread")]
async fn welcome_view_smoke_renders_gate() {
    let mut harness = setup_view_harness(ViewKind::Welcome);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Welcome to Match & Learn!"),
        "missing title in {html}"
    );
    assert!(html.contains("Start Game"), "missing start button in {html}");
    assert!(html.contains("maxlength=\"3\""), "missing code input in {html}");
    // Rendering alone triggers no audio.
    assert!(harness.sounds.played().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_renders_first_level() {
    let mut harness = setup_view_harness(ViewKind::Game);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Level 1 of 2"), "missing progress in {html}");
    assert!(html.contains("Score: 0 / 2"), "missing score in {html}");
    assert!(
        html.contains("A ___ says meow."),
        "missing fill sentence in {html}"
    );
    assert!(html.contains("Check"), "missing check button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn engine_smoke_degrades_unknown_level() {
    let level: LevelDefinition =
        serde_json::from_str(r#"{"type":"karaoke","sentence":"La la la."}"#)
            .expect("unknown level parses");
    let mut harness = setup_view_harness(ViewKind::Engine(level));
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Unknown level type"),
        "missing placeholder in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn engine_smoke_renders_choice_options() {
    let level: LevelDefinition = serde_json::from_str(
        r#"{"type":"choice","sentence":"A ___ barks.","options":["dog","cat"],"correctAnswer":"dog"}"#,
    )
    .expect("choice level parses");
    let mut harness = setup_view_harness(ViewKind::Engine(level));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("A ___ barks."), "missing sentence in {html}");
    assert!(html.contains("dog"), "missing option in {html}");
    assert!(html.contains("cat"), "missing option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn engine_smoke_renders_assembly_tokens_and_slots() {
    let level: LevelDefinition = serde_json::from_str(
        r#"{"type":"assembly","sentenceTemplate":"[I] [run].","draggableTokens":["run","I"],"correctOrder":["I","run"]}"#,
    )
    .expect("assembly level parses");
    let mut harness = setup_view_harness(ViewKind::Engine(level));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("assembly-slot"), "missing slots in {html}");
    assert!(html.contains("token-chip"), "missing chips in {html}");
    assert!(html.contains("run"), "missing token in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn summary_smoke_renders_score_and_missed_rows() {
    let mut harness = setup_view_harness(ViewKind::Summary);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Your Score: 0 / 2"), "missing score in {html}");
    assert!(
        html.contains("Questions you got wrong:"),
        "missing heading in {html}"
    );
    assert!(html.contains("Level 1:"), "missing first row in {html}");
    assert!(
        html.contains("Your answer: dog"),
        "missing submitted answer in {html}"
    );
    assert!(
        html.contains("Correct answer: cat"),
        "missing expected answer in {html}"
    );
    assert!(html.contains("Restart Game"), "missing restart in {html}");
}
