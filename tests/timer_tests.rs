//! Deferred flip-back tests.
//!
//! These pin down the ordering between mismatch timers, the engine clock
//! and new rounds.

use std::time::Duration;

use memory_match::cards::{CardIndex, FaceId};
use memory_match::core::{Action, GameConfig};
use memory_match::rules::{Applied, GameEngine, IgnoreReason, SelectOutcome};

const A: FaceId = FaceId::new(0);
const B: FaceId = FaceId::new(1);
const C: FaceId = FaceId::new(2);

fn engine(delay: Duration) -> GameEngine {
    let config = GameConfig::new()
        .with_faces(["A", "B", "C"])
        .with_flip_back_delay(delay)
        .with_seed(11);
    let mut engine = GameEngine::new(config).unwrap();
    engine.initialize_with_layout(&[A, B, C, A, B, C]).unwrap();
    engine
}

fn mismatch(engine: &mut GameEngine) {
    engine.select_card(0).unwrap();
    let outcome = engine.select_card(1).unwrap();
    assert!(matches!(outcome, SelectOutcome::Mismatched { .. }));
}

/// Cards stay visible until the full delay has passed.
#[test]
fn test_flip_back_waits_for_delay() {
    let mut engine = engine(Duration::from_millis(1000));
    mismatch(&mut engine);

    assert_eq!(engine.advance(Duration::from_millis(600)), 0);
    assert!(engine.state().is_locked());
    assert_eq!(engine.next_deadline(), Some(Duration::from_millis(400)));
    assert_eq!(
        engine.select_card(2).unwrap(),
        SelectOutcome::Ignored(IgnoreReason::Locked)
    );

    assert_eq!(engine.advance(Duration::from_millis(400)), 1);
    assert!(!engine.state().is_locked());
    assert!(engine.state().selection().is_empty());
    assert!(!engine.state().card(CardIndex::new(0)).unwrap().is_revealed());
    assert!(!engine.state().card(CardIndex::new(1)).unwrap().is_revealed());
}

/// The flip-back runs exactly once.
#[test]
fn test_flip_back_fires_once() {
    let mut engine = engine(Duration::from_millis(1000));
    mismatch(&mut engine);

    assert_eq!(engine.advance(Duration::from_secs(5)), 1);

    engine.select_card(0).unwrap();
    let before = engine.state().clone();
    assert_eq!(engine.advance(Duration::from_secs(5)), 0);
    assert_eq!(engine.state(), &before);
}

/// Reset before the delay: the old flip-back never touches the new deck.
#[test]
fn test_reset_cancels_pending_flip_back() {
    let mut engine = engine(Duration::from_millis(1000));
    mismatch(&mut engine);
    engine.advance(Duration::from_millis(500));

    engine.reset();
    assert_eq!(engine.next_deadline(), None);

    // Reveal the same indices the stale task would hide.
    engine.select_card(0).unwrap();
    let before = engine.state().clone();
    assert_eq!(before.move_count(), 0);

    assert_eq!(engine.advance(Duration::from_millis(1000)), 0);
    assert_eq!(engine.state(), &before);
    assert!(engine.state().card(CardIndex::new(0)).unwrap().is_revealed());
}

/// A new round's own mismatch still flips back after the old one was dropped.
#[test]
fn test_new_round_timer_still_works() {
    let mut engine = engine(Duration::from_millis(1000));
    mismatch(&mut engine);
    engine.advance(Duration::from_millis(900));

    engine.initialize_with_layout(&[A, B, C, A, B, C]).unwrap();
    mismatch(&mut engine);

    // The old deadline would have passed here.
    assert_eq!(engine.advance(Duration::from_millis(100)), 0);
    assert!(engine.state().is_locked());

    assert_eq!(engine.advance(Duration::from_millis(900)), 1);
    assert!(!engine.state().is_locked());
    assert_eq!(engine.state().move_count(), 1);
}

/// Zero delay flips back on the next clock tick.
#[test]
fn test_zero_delay() {
    let mut engine = engine(Duration::ZERO);
    mismatch(&mut engine);
    assert!(engine.state().is_locked());

    assert_eq!(engine.advance(Duration::ZERO), 1);
    assert!(!engine.state().is_locked());
}

/// The same ordering holds through the action interface.
#[test]
fn test_apply_sequence() {
    let mut engine = engine(Duration::from_millis(1000));

    engine.apply(Action::Select(CardIndex::new(0))).unwrap();
    engine.apply(Action::Select(CardIndex::new(1))).unwrap();
    let reset = engine.apply(Action::Reset).unwrap();
    let tick = engine.apply(Action::Advance(Duration::from_secs(2))).unwrap();

    assert!(matches!(reset, Applied::Reset { .. }));
    assert_eq!(tick, Applied::Advanced { fired: 0 });
    assert_eq!(engine.state().move_count(), 0);
    // The tick ran nothing, so only the three inputs are recorded.
    assert_eq!(engine.history().len(), 3);
}
