// src/draw/mod.rs
// Low level nannou draw primitives

pub mod line_draw;

pub use line_draw::{draw_line, LineSegment};

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct DrawParams {
    pub color: Rgb<f32>,
    pub stroke_weight: f32,
}
