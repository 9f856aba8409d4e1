use dioxus::prelude::*;
use quiz_core::model::{QUESTION_COUNT, question_bank};
use services::{QuizIntent, QuizSnapshot};

use crate::vm::map_summary;

use super::summary::SummaryPanel;
use super::test_harness::setup_view_harness;

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    harness.drive_until(|s| s.question_number == 1).await;

    let html = harness.render();
    assert!(
        html.contains("Which keyword is used to define a constant in Swift?"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Question 1 of 10"), "missing progress in {html}");
    for option in ["constant", "var", "let", "const"] {
        assert!(html.contains(option), "missing {option} in {html}");
    }
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(!html.contains("Correct!"), "unexpected modal in {html}");
    assert!(html.contains("audio-toggle"), "missing music toggle in {html}");
    assert!(
        html.contains("Kahoot Lobby Music 80s Edition"),
        "missing track title in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_answer_opens_modal() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    harness.drive_async().await;

    harness.dispatch(QuizIntent::Answer("let".to_string()));
    harness.drive_until(|s| s.show_answer_modal).await;

    let html = harness.render();
    assert!(html.contains("Correct!"), "missing verdict in {html}");
    assert!(html.contains("Score: 1"), "missing score in {html}");
    assert!(html.contains("Question 2 of 10"), "missing progress in {html}");

    harness.dispatch(QuizIntent::DismissModal);
    harness.drive_until(|s| !s.show_answer_modal).await;
    let html = harness.render();
    assert!(!html.contains("Correct!"), "modal still open in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_wrong_answers_reach_summary() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    harness.drive_async().await;

    for _ in 0..QUESTION_COUNT {
        harness.dispatch(QuizIntent::Answer("nope".to_string()));
    }
    let done = harness.drive_until(|s| s.show_summary).await;
    assert_eq!(done.score, 0);

    let html = harness.render();
    assert!(html.contains("Quiz Summary"), "missing title in {html}");
    assert!(html.contains("Score: 0 / 10"), "missing score in {html}");
    assert!(html.contains("WOW U SUCK"), "missing message in {html}");
    assert!(html.contains("Restart"), "missing restart in {html}");
    assert!(!html.contains("Wrong!"), "modal shown over summary in {html}");
    assert!(!html.contains("audio-toggle"), "music toggle on summary in {html}");
    assert!(!done.audio_playing);

    harness.dispatch(QuizIntent::Restart);
    harness.drive_until(|s| !s.show_summary).await;
    let html = harness.render();
    assert!(html.contains("Question 1 of 10"), "not restarted in {html}");
}

fn middle_band_summary() -> Element {
    let mut snapshot = QuizSnapshot::fresh(&question_bank());
    snapshot.question = None;
    snapshot.show_summary = true;
    snapshot.score = 5;

    rsx! {
        SummaryPanel { summary: map_summary(&snapshot), on_restart: move |()| {} }
    }
}

#[test]
fn summary_panel_renders_middle_band() {
    let mut dom = VirtualDom::new(middle_band_summary);
    dom.rebuild_in_place();

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Quiz Summary"), "missing title in {html}");
    assert!(html.contains("5 / 10"), "missing ratio in {html}");
    assert!(html.contains("eh decent score ig"), "missing message in {html}");
    assert!(html.contains("rotate(-90 50 50)"), "missing ring in {html}");
}
