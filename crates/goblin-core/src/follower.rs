//! State for the goblin that chases the pointer.
//!
//! The goblin closes a fixed fraction of the remaining gap every frame
//! (exponential approach, no velocity). Its heading is the direction of the
//! gap, which the renderer uses to aim the pupils.

use crate::constants::PUPIL_REACH;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub current: Vec2,
    pub target: Vec2,
    pub heading: f32,
}

impl PointerState {
    /// Park the goblin at `start` with nowhere to go yet.
    pub fn new(start: Vec2) -> Self {
        Self {
            current: start,
            target: start,
            heading: 0.0,
        }
    }

    /// Centered in a viewport of the given size.
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(Vec2::new(width / 2.0, height / 2.0))
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Advance one frame and return the new heading.
    ///
    /// The heading is taken from the gap measured before moving, so it keeps
    /// pointing at the target even as the gap shrinks toward zero.
    pub fn step(&mut self, speed: f32) -> f32 {
        let delta = self.target - self.current;
        self.current += delta * speed;
        self.heading = delta.y.atan2(delta.x);
        self.heading
    }

    #[inline]
    pub fn remaining(&self) -> f32 {
        self.current.distance(self.target)
    }
}

/// Offset of the pupils from the eye centers for a given heading.
#[inline]
pub fn pupil_offset(heading: f32) -> Vec2 {
    Vec2::from_angle(heading) * PUPIL_REACH
}
