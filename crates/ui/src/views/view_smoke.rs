use std::sync::Arc;
use std::time::Duration;

use services::{LocalWordSource, WordSourceError};
use speller_core::QuizSession;

use super::test_harness::{
    UnavailableSource, pool_entries, sample_entries, setup_view_harness,
    setup_view_harness_with_source,
};
use crate::vm::ShellVm;

fn playing() -> ShellVm {
    ShellVm::playing(QuizSession::new(sample_entries()).unwrap())
}

#[tokio::test(flavor = "current_thread")]
async fn idle_shell_offers_start() {
    let mut harness = setup_view_harness(ShellVm::new());

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Word Practice"), "missing title in {html}");
    assert!(html.contains("Start"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn loading_shell_shows_progress_text() {
    let mut shell = ShellVm::new();
    shell.begin_fetch().unwrap();
    let mut harness = setup_view_harness(shell);

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Picking words..."), "missing loading text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn playing_shell_renders_quiz_card() {
    let mut harness = setup_view_harness(playing());

    harness.rebuild();
    let html = harness.render();

    for expected in ["Word 1 / 1", "Score: 0", "Elma", "5 letters", "Hint", "Quit"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(
        !html.contains("A round fruit"),
        "definition should be hidden in source mode: {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn hinted_entry_lights_dots() {
    let mut shell = playing();
    let session = shell.session_mut().unwrap();
    session.request_hint();
    session.request_hint();
    let mut harness = setup_view_harness(shell);

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("3 letters"), "missing remaining count in {html}");
    assert!(html.contains("hint-dot--on"), "missing lit hint dot in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_answer_shows_feedback() {
    let mut shell = playing();
    shell.session_mut().unwrap().submit_answer("apply");
    let mut harness = setup_view_harness(shell);

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Try again or use a hint!"), "missing feedback in {html}");
    assert!(html.contains("quiz-input--incorrect"), "missing input state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn completed_shell_renders_summary() {
    let mut shell = playing();
    let session = shell.session_mut().unwrap();
    session.submit_answer("apple");
    session.advance();
    let mut harness = setup_view_harness(shell);

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Congratulations!"), "missing title in {html}");
    assert!(html.contains("1/1"), "missing score in {html}");
    assert!(html.contains("New Words"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_fetch_offers_retry() {
    let mut shell = ShellVm::new();
    let ticket = shell.begin_fetch().unwrap();
    shell.finish_fetch(ticket, Err(WordSourceError::Unavailable));
    let mut harness = setup_view_harness(shell);

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Something went wrong"), "missing heading in {html}");
    assert!(
        html.contains("An error occurred while loading the words."),
        "missing message in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_fetches_words_and_begins_playing() {
    let source = LocalWordSource::with_entries(pool_entries())
        .with_seed(3)
        .with_delay(Duration::from_millis(20));
    let mut harness = setup_view_harness_with_source(ShellVm::new(), Arc::new(source));
    harness.rebuild();

    harness.start();
    let html = harness.render();
    assert!(html.contains("Picking words..."), "missing loading text in {html}");

    let html = harness.drive_until("Word 1 / 1").await;
    assert!(html.contains("Word 1 / 1"), "session did not start: {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(!html.contains("Picking words..."), "still loading: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_with_failing_source_offers_retry() {
    let mut harness = setup_view_harness_with_source(ShellVm::new(), Arc::new(UnavailableSource));
    harness.rebuild();

    harness.start();
    let html = harness.render();
    assert!(html.contains("Picking words..."), "missing loading text in {html}");

    let html = harness.drive_until("Retry").await;
    assert!(html.contains("Something went wrong"), "missing heading in {html}");
    assert!(
        html.contains("An error occurred while loading the words."),
        "missing message in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}
