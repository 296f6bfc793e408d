// src/views/stage.rs
//
// The stage owns the background and the renderer, clears and redraws every
// frame, and turns input into taps.

use log::info;
use nannou::prelude::*;

use crate::animation::StateUpdate;
use crate::config::Settings;
use crate::render::Renderer;

pub struct Stage {
    background: Rgb,
    renderer: Renderer,
}

impl Stage {
    pub fn new(width: f32, height: f32, settings: Settings) -> Self {
        Self {
            background: settings.background(),
            renderer: Renderer::new(width, height, settings),
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn set_background(&mut self, color: Rgb) {
        info!("Background set to {:?}", color);
        self.background = color;
    }

    pub fn pointer_down(&mut self) -> bool {
        self.renderer.handle_tap()
    }

    pub fn update(&mut self, dt: f32) -> StateUpdate {
        self.renderer.update(dt)
    }

    pub fn draw(&self, draw: &Draw) {
        draw.background().color(self.background);
        self.renderer.draw(draw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_down_drives_renderer() {
        let mut stage = Stage::new(400.0, 400.0, Settings::default());
        assert!(stage.pointer_down());
        assert!(stage.renderer().is_animating());
        assert_eq!(stage.update(0.02), StateUpdate::Completed);
        assert_eq!(stage.renderer().path().current_index(), 1);
    }

    #[test]
    fn test_set_background() {
        let mut stage = Stage::new(400.0, 400.0, Settings::default());
        assert_eq!(stage.background(), Settings::default().background());
        stage.set_background(rgb(1.0, 0.0, 0.0));
        assert_eq!(stage.background(), rgb(1.0, 0.0, 0.0));
    }
}
