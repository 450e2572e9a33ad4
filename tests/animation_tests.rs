// Host-side tests for frame-loop bookkeeping. The browser loop feeds
// requestAnimationFrame ids through the same state.

use cinematch_web::animation::LoopState;

#[test]
fn tick_then_rearm_tracks_the_outstanding_request() {
    let mut state = LoopState::new();
    assert_eq!(state.pending(), None);
    state.arm(1);
    assert_eq!(state.pending(), Some(1));

    state.fire();
    assert_eq!(state.pending(), None);
    assert!(state.should_continue());
    state.arm(2);
    assert_eq!(state.pending(), Some(2));
    assert_eq!(state.ticks(), 1);
}

#[test]
fn cancel_returns_pending_request_once() {
    let mut state = LoopState::new();
    state.arm(7);
    assert_eq!(state.cancel(), Some(7));
    assert!(state.is_cancelled());
    assert!(!state.should_continue());
    assert_eq!(state.pending(), None);

    // second destroy is a no-op
    assert_eq!(state.cancel(), None);
    assert_eq!(state.pending(), None);
}

#[test]
fn cancel_without_pending_request_is_fine() {
    let mut state = LoopState::new();
    assert_eq!(state.cancel(), None);
    assert_eq!(state.cancel(), None);
}

#[test]
fn no_rearm_after_cancel() {
    let mut state = LoopState::new();
    state.arm(3);
    state.fire();
    state.cancel();
    state.arm(4);
    assert_eq!(state.pending(), None);
}

#[test]
fn cancel_during_a_tick_stops_the_reschedule() {
    let mut state = LoopState::new();
    let mut next_id = 0;
    let mut frames = 0;
    state.arm(next_id);
    for _ in 0..10 {
        state.fire();
        frames += 1;
        if frames == 4 {
            state.cancel();
        }
        if !state.should_continue() {
            break;
        }
        next_id += 1;
        state.arm(next_id);
    }
    assert_eq!(frames, 4);
    assert_eq!(state.ticks(), 4);
    assert_eq!(state.pending(), None);
}
