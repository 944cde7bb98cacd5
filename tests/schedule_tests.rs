// Host-side tests for animation-loop cancellation.

use goblin_core::{CancelToken, FrameStep};

#[test]
fn clones_share_the_flag() {
    let token = CancelToken::new();
    let held_by_loop = token.clone();
    assert!(!held_by_loop.is_cancelled());
    token.cancel();
    assert!(held_by_loop.is_cancelled());
    // cancelling twice is harmless
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn independent_tokens_do_not_interfere() {
    let a = CancelToken::new();
    let b = CancelToken::default();
    a.cancel();
    assert!(!b.is_cancelled());
}

#[test]
fn driving_a_loop_stops_on_cancel_or_done() {
    // stand-in for the rAF driver: keep ticking while Continue and not cancelled
    fn drive(token: &CancelToken, mut tick: impl FnMut() -> FrameStep) -> usize {
        let mut frames = 0;
        while !token.is_cancelled() && frames < 1_000 {
            frames += 1;
            if tick() == FrameStep::Done {
                break;
            }
        }
        frames
    }

    let token = CancelToken::new();
    let mut n = 0;
    let frames = drive(&token, || {
        n += 1;
        if n == 10 {
            FrameStep::Done
        } else {
            FrameStep::Continue
        }
    });
    assert_eq!(frames, 10);

    let token = CancelToken::new();
    let inner = token.clone();
    let mut n = 0;
    let frames = drive(&token, move || {
        n += 1;
        if n == 3 {
            inner.cancel();
        }
        FrameStep::Continue
    });
    assert_eq!(frames, 3);
}
