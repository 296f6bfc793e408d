// src/animation/state.rs
//
// Scale/direction state for a single node.
// A transition runs from one resting end (0 or 1) to the other.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateUpdate {
    Idle,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub scale: f32,
    pub dir: f32,
    pub prev_scale: f32,
    step: f32,
}

impl AnimationState {
    /// `step` is the scale added per update. 1.0 finishes in one update.
    pub fn new(step: f32) -> Self {
        Self {
            scale: 0.0,
            dir: 0.0,
            prev_scale: 0.0,
            step,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.dir == 0.0
    }

    /// Heads toward whichever end the state is not resting at.
    /// Returns false if a transition is already running.
    pub fn start_updating(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.dir = 1.0 - 2.0 * self.prev_scale;
        debug!("state start: prev_scale {} dir {}", self.prev_scale, self.dir);
        true
    }

    pub fn update(&mut self) -> StateUpdate {
        if self.is_idle() {
            return StateUpdate::Idle;
        }

        self.scale += self.step * self.dir;
        if (self.scale - self.prev_scale).abs() >= 1.0 {
            self.scale = self.prev_scale + self.dir;
            self.prev_scale = self.scale;
            self.dir = 0.0;
            StateUpdate::Completed
        } else {
            StateUpdate::InProgress
        }
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(1.0)
    }
}
