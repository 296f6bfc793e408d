// src/animation/animator.rs
//
// Fixed-period ticker driven from the frame loop.
// Only one ticker ever exists per animator: start/stop just flip a flag.

use log::debug;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Animator {
    animated: bool,
    interval: f32,
    frame_timer: f32,
}

impl Animator {
    pub fn new(interval: Duration) -> Self {
        Self {
            animated: false,
            interval: interval.as_secs_f32(),
            frame_timer: 0.0,
        }
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.animated {
            return false;
        }
        self.animated = true;
        self.frame_timer = 0.0;
        debug!("animator started");
        true
    }

    /// Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.animated {
            return false;
        }
        self.animated = false;
        debug!("animator stopped");
        true
    }

    /// Advances the timer by `dt` seconds. True when a tick is due.
    /// At most one tick fires per call; leftover time carries over.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.animated {
            return false;
        }
        self.frame_timer += dt;
        if self.frame_timer >= self.interval {
            self.frame_timer = (self.frame_timer - self.interval).min(self.interval);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> Animator {
        Animator::new(Duration::from_millis(20))
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut animator = animator();
        assert!(animator.start());
        assert!(!animator.start());
        assert!(animator.is_animated());

        // a second start must not reset the running timer
        assert!(!animator.update(0.015));
        animator.start();
        assert!(animator.update(0.006));
    }

    #[test]
    fn test_stop_when_stopped_is_noop() {
        let mut animator = animator();
        assert!(!animator.stop());
        assert!(animator.start());
        assert!(animator.stop());
        assert!(!animator.stop());
        assert!(!animator.is_animated());
    }

    #[test]
    fn test_ticks_once_per_interval() {
        let mut animator = animator();
        animator.start();
        assert!(!animator.update(0.010));
        assert!(animator.update(0.011));
        assert!(!animator.update(0.005));
        assert!(animator.update(0.020));
    }

    #[test]
    fn test_long_frame_fires_single_tick() {
        let mut animator = animator();
        animator.start();
        assert!(animator.update(0.5));
        // backlog is capped at one interval
        assert!(animator.update(0.0));
        assert!(!animator.update(0.0));
    }

    #[test]
    fn test_stopped_animator_never_ticks() {
        let mut animator = animator();
        assert!(!animator.update(1.0));
        animator.start();
        animator.stop();
        assert!(!animator.update(1.0));
    }
}
