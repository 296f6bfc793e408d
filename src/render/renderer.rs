// src/render/renderer.rs
// the renderer ties the shape path to the animator: a tap starts the ticker,
// a completed transition stops it

use log::{debug, info};
use nannou::prelude::*;

use crate::animation::{Animator, NodeChain, ShapePath, StateUpdate};
use crate::config::Settings;

use crate::render::ShapeRenderer;

pub struct Renderer {
    path: ShapePath,
    animator: Animator,
    shape: ShapeRenderer,
}

impl Renderer {
    /// `width`/`height` are the viewport size, read once at startup.
    pub fn new(width: f32, height: f32, settings: Settings) -> Self {
        let chain = NodeChain::new(settings.palette_len(), settings.scale_step());
        info!(
            "Renderer ready: {} nodes, {}x{} viewport",
            chain.len(),
            width,
            height
        );

        Self {
            path: ShapePath::new(chain),
            animator: Animator::new(settings.tick_interval()),
            shape: ShapeRenderer::new(width, height, settings),
        }
    }

    pub fn path(&self) -> &ShapePath {
        &self.path
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animated()
    }

    /// Starts a transition on the current node. Ignored while one is running.
    pub fn handle_tap(&mut self) -> bool {
        if !self.path.start_updating() {
            debug!("tap ignored, node {} still animating", self.path.current_index());
            return false;
        }
        self.animator.start();
        info!("Animating node {}", self.path.current_index());
        true
    }

    /// Advances the ticker by `dt` seconds and steps the path on each tick.
    pub fn update(&mut self, dt: f32) -> StateUpdate {
        if !self.animator.update(dt) {
            return if self.animator.is_animated() {
                StateUpdate::InProgress
            } else {
                StateUpdate::Idle
            };
        }

        let result = self.path.update();
        if result == StateUpdate::Completed {
            self.animator.stop();
            info!("Transition complete, now at node {}", self.path.current_index());
        }
        result
    }

    pub fn draw(&self, draw: &Draw) {
        self.path.draw(draw, &self.shape);
    }
}
