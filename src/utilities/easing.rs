//src/utilities/easing.rs

// scalar helpers that turn a single scale value into per-segment progress

use std::f32::consts::PI;

use nannou::prelude::{pt2, Point2};

/// Weight left for sub-segment `i` of `n`: `max(0, scale - i/n)`.
pub fn clamp_decay(scale: f32, i: usize, n: usize) -> f32 {
    (scale - i as f32 / n as f32).max(0.0)
}

/// Visible fraction of sub-segment `i`, capped at `1/n`.
pub fn segment_scale(scale: f32, i: usize, n: usize) -> f32 {
    (1.0 / n as f32).min(clamp_decay(scale, i, n))
}

/// `segment_scale` stretched back to 0..1 so a segment can be drawn in full.
pub fn segment_progress(scale: f32, i: usize, n: usize) -> f32 {
    segment_scale(scale, i, n) * n as f32
}

// 0 at both ends, 1 at the midpoint
pub fn ease(scale: f32) -> f32 {
    (scale * PI).sin()
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn lerp_point(a: Point2, b: Point2, t: f32) -> Point2 {
    pt2(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}
