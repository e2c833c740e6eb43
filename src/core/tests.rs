//! Core domain: tests for timed sequences and pause bookkeeping.

use super::{Continuation, Facing, GameLayer, GameplayPaused, Suspend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Settle,
    Strike,
}

#[test]
fn test_next_tick_resumes_on_first_tick() {
    let mut cont = Continuation::default();
    cont.suspend(Stage::Settle, Suspend::NextTick);

    assert!(cont.is_pending());
    assert_eq!(cont.tick(0.0), Some(Stage::Settle));
    assert!(!cont.is_pending());
    assert_eq!(cont.tick(1.0), None);
}

#[test]
fn test_seconds_accumulate_across_ticks() {
    let mut cont = Continuation::default();
    cont.suspend(Stage::Strike, Suspend::Seconds(0.15));

    assert_eq!(cont.tick(0.05), None);
    assert_eq!(cont.tick(0.05), None);
    assert_eq!(cont.tick(0.05), Some(Stage::Strike));
}

#[test]
fn test_cancel_prevents_resumption() {
    let mut cont = Continuation::default();
    cont.suspend(Stage::Strike, Suspend::Seconds(0.1));
    cont.cancel();

    assert!(!cont.is_pending());
    assert_eq!(cont.tick(10.0), None);
}

#[test]
fn test_suspend_replaces_pending_stage() {
    let mut cont = Continuation::default();
    cont.suspend(Stage::Settle, Suspend::Seconds(5.0));
    cont.suspend(Stage::Strike, Suspend::NextTick);

    assert_eq!(cont.pending_stage(), Some(Stage::Strike));
    assert_eq!(cont.tick(0.016), Some(Stage::Strike));
}

#[test]
fn test_pause_toggle_tracks_source() {
    let mut paused = GameplayPaused::default();
    assert!(paused.toggle("menu"));
    assert!(paused.is_paused());
    assert!(!paused.toggle("menu"));
    assert!(!paused.is_paused());
}

#[test]
fn test_layer_opponents() {
    assert!(matches!(GameLayer::Player.opponent(), GameLayer::Enemy));
    assert!(matches!(GameLayer::Enemy.opponent(), GameLayer::Player));
}

#[test]
fn test_facing_toward_keeps_current_on_zero() {
    assert_eq!(Facing::Left.toward(2.0), Facing::Right);
    assert_eq!(Facing::Right.toward(-0.1), Facing::Left);
    assert_eq!(Facing::Left.toward(0.0), Facing::Left);
    assert_eq!(Facing::Left.flipped().sign(), 1.0);
}
