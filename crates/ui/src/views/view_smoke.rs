use eggsy_core::messages;
use eggsy_core::model::{ProfileId, SessionMode};
use eggsy_core::rng::ScriptedDice;

use crate::vm::KitchenIntent;

use super::test_harness::{default_settings, setup_kitchen_harness};

#[tokio::test(flavor = "current_thread")]
async fn idle_kitchen_lists_the_catalog() {
    let mut harness = setup_kitchen_harness(ScriptedDice::new(), default_settings());
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("How do you like your egg today"), "missing greeting in {html}");
    assert!(html.contains("Soft &amp; runny (6 min)"), "missing soft profile in {html}");
    assert!(html.contains("Medium (8 min)"), "missing medium profile in {html}");
    assert!(html.contains("Hard-boiled (12 min)"), "missing hard profile in {html}");
    assert!(html.contains("🔊"), "mute toggle should start unmuted in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn starting_a_cook_shows_the_countdown() {
    let mut harness = setup_kitchen_harness(ScriptedDice::new(), default_settings());
    harness.rebuild();

    harness.dispatch(KitchenIntent::Start(ProfileId::new(0)));

    let html = harness.render();
    assert!(html.contains("6:00"), "missing countdown in {html}");
    assert!(html.contains(messages::SOAKING), "missing soaking message in {html}");
    assert!(html.contains("Cancel"), "missing cancel control in {html}");
    assert!(html.contains("width: 0.0%"), "progress should start empty in {html}");

    let vm = harness.handles().vm();
    assert_eq!(vm.read().mode(), SessionMode::Running);
}

#[tokio::test(flavor = "current_thread")]
async fn ticking_to_zero_celebrates_once() {
    let mut harness = setup_kitchen_harness(ScriptedDice::new(), default_settings());
    harness.rebuild();

    harness.dispatch(KitchenIntent::Start(ProfileId::new(0)));
    for _ in 0..360 {
        harness.dispatch(KitchenIntent::Tick);
    }
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains(messages::READY), "missing ready message in {html}");
    assert!(html.contains("cook another egg!"), "missing reset control in {html}");
    assert!(html.contains("confetti"), "missing confetti overlay in {html}");
    assert!(html.contains("width: 100.0%"), "progress should be full in {html}");
    assert_eq!(harness.chime.plays(), 1, "chime should fire exactly once");

    // Extra ticks after completion change nothing and never re-chime.
    harness.dispatch(KitchenIntent::Tick);
    assert_eq!(harness.chime.plays(), 1);

    harness.dispatch(KitchenIntent::CelebrationOver);
    let html = harness.render();
    assert!(!html.contains("confetti__piece"), "confetti should clear in {html}");

    harness.dispatch(KitchenIntent::Reset);
    let html = harness.render();
    assert!(html.contains("How do you like your egg today"), "missing picker after reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn muted_completion_stays_silent() {
    let mut harness = setup_kitchen_harness(ScriptedDice::new(), default_settings());
    harness.rebuild();

    harness.dispatch(KitchenIntent::ToggleMute);
    let html = harness.render();
    assert!(html.contains("🔇"), "mute toggle should show muted in {html}");

    harness.dispatch(KitchenIntent::Start(ProfileId::new(0)));
    for _ in 0..360 {
        harness.dispatch(KitchenIntent::Tick);
    }

    assert_eq!(harness.service.snapshot().mode, SessionMode::Completed);
    assert_eq!(harness.chime.plays(), 0, "muted completion must not chime");
}

#[tokio::test(flavor = "current_thread")]
async fn cancel_returns_to_the_picker() {
    let mut harness = setup_kitchen_harness(ScriptedDice::new(), default_settings());
    harness.rebuild();

    harness.dispatch(KitchenIntent::Start(ProfileId::new(1)));
    for _ in 0..10 {
        harness.dispatch(KitchenIntent::Tick);
    }
    harness.dispatch(KitchenIntent::Cancel);

    let html = harness.render();
    assert!(html.contains("How do you like your egg today"), "missing picker after cancel in {html}");
    assert_eq!(harness.chime.plays(), 0, "cancel must not chime");
    assert_eq!(harness.service.snapshot().mode, SessionMode::Idle);
}

#[tokio::test(flavor = "current_thread")]
async fn scripted_chatter_reaches_the_screen() {
    let dice = ScriptedDice::new().with_chances([true]).with_picks([3]);
    let mut harness = setup_kitchen_harness(dice, default_settings());
    harness.rebuild();

    harness.dispatch(KitchenIntent::Start(ProfileId::new(0)));
    harness.dispatch(KitchenIntent::Tick);

    let html = harness.render();
    assert!(
        html.contains(messages::COOKING[3]),
        "missing rotated message in {html}"
    );
}
