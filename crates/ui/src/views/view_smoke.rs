use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_display};
use crate::context::DisplayConfig;

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_renders_timer_and_front_card() {
    let mut harness = setup_view_harness(ViewKind::Study, &[("Capital of France?", "Paris")]);

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Time: 100"), "missing timer in {html}");
    assert!(html.contains("Capital of France?"), "missing prompt in {html}");
    assert!(!html.contains("Paris"), "answer shown before reveal in {html}");
    assert!(!html.contains("Start Again"), "unexpected restart in {html}");
    assert!(!html.contains("answer-buttons"), "unexpected buttons in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_offers_start_again_on_empty_deck() {
    let mut harness = setup_view_harness(ViewKind::Study, &[]);

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Start Again"), "missing restart in {html}");
    assert!(html.contains("stack--locked"), "stack should be locked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_shows_buttons_for_colour_free_display() {
    let display = DisplayConfig {
        differentiate_without_color: true,
        voice_over: false,
    };
    let mut harness =
        setup_view_harness_with_display(ViewKind::Study, &[("Q", "A")], display);

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Correct"), "missing correct button in {html}");
    assert!(html.contains("Wrong"), "missing wrong button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn editor_view_smoke_lists_saved_cards() {
    let mut harness = setup_view_harness(ViewKind::Editor, &[("First", "1"), ("Second", "2")]);

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Add new card"), "missing form in {html}");
    let first = html.find("First").expect("first row");
    let second = html.find("Second").expect("second row");
    assert!(first < second, "rows out of order in {html}");
    assert_eq!(html.matches("btn btn-danger").count(), 2, "delete buttons in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn editor_view_smoke_starts_empty_without_error() {
    let mut harness = setup_view_harness(ViewKind::Editor, &[]);

    harness.rebuild();
    let html = harness.render();

    assert!(!html.contains("role=\"alert\""), "unexpected error in {html}");
    assert!(!html.contains("card-row"), "unexpected rows in {html}");
}
