//! Frame-loop plumbing shared by the animated widgets.

use std::cell::Cell;
use std::rc::Rc;

/// What a per-frame callback wants to happen next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStep {
    Continue,
    Done,
}

/// Shared stop flag for an animation loop.
///
/// Clones observe the same flag. Everything runs on the UI thread so `Rc` is enough.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}
