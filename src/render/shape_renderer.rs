// src/render/shape_renderer.rs
//
// The triangular notch. Its outline reveals one segment at a time and the
// interior sweeps in from the left alongside the last segment.

use nannou::prelude::*;

use crate::config::Settings;
use crate::draw::{draw_line, DrawParams, LineSegment};
use crate::utilities::{clip_polygon, ease, segment_progress};

const VERTEX_COUNT: usize = 5;

/// Outline segments revealed one after another; the eased scale is split
/// into this many equal parts.
pub const SEGMENT_COUNT: usize = VERTEX_COUNT - 1;

/// Fixed outline of the shape, centred on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGeometry {
    pub size: f32,
    pub stroke_weight: f32,
    pub vertices: [Point2; VERTEX_COUNT],
}

impl ShapeGeometry {
    pub fn new(width: f32, height: f32, settings: &Settings) -> Self {
        let min_side = width.min(height);
        let size = min_side / settings.size_factor();
        let half = size / 2.0;

        Self {
            size,
            stroke_weight: min_side / settings.stroke_factor(),
            vertices: [
                pt2(-size, half),
                pt2(0.0, half),
                pt2(size, half),
                pt2(0.0, -half),
                pt2(-size, half),
            ],
        }
    }

    pub fn triangle(&self) -> [Point2; 3] {
        [self.vertices[0], self.vertices[2], self.vertices[3]]
    }
}

/// Everything needed to draw the shape at one scale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeFrame {
    pub lines: Vec<LineSegment>,
    pub fill: Vec<Point2>,
}

#[derive(Debug, Clone)]
pub struct ShapeRenderer {
    geometry: ShapeGeometry,
    settings: Settings,
}

impl ShapeRenderer {
    pub fn new(width: f32, height: f32, settings: Settings) -> Self {
        Self {
            geometry: ShapeGeometry::new(width, height, &settings),
            settings,
        }
    }

    pub fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    pub fn frame(&self, scale: f32) -> ShapeFrame {
        let eased = ease(scale);
        let vertices = &self.geometry.vertices;

        let lines: Vec<LineSegment> = (0..SEGMENT_COUNT)
            .map(|j| LineSegment {
                start: vertices[j],
                target: vertices[j + 1],
                progress: segment_progress(eased, j, SEGMENT_COUNT),
            })
            .filter(LineSegment::is_visible)
            .collect();

        // the fill sweeps with the last outline segment
        let sweep = segment_progress(eased, SEGMENT_COUNT - 1, SEGMENT_COUNT);
        let fill = if sweep > 0.0 {
            let size = self.geometry.size;
            let left = -size;
            let right = left + 2.0 * size * sweep;
            let half = size / 2.0;
            let rect = [pt2(left, -half), pt2(right, -half), pt2(right, half), pt2(left, half)];
            clip_polygon(&rect, &self.geometry.triangle())
        } else {
            Vec::new()
        };

        ShapeFrame { lines, fill }
    }

    /// Draws node `index` at `scale`. Color comes from the palette.
    pub fn draw(&self, draw: &Draw, index: usize, scale: f32) {
        let frame = self.frame(scale);
        let params = DrawParams {
            color: self.settings.color(index),
            stroke_weight: self.geometry.stroke_weight,
        };

        if frame.fill.len() >= 3 {
            draw.polygon().color(params.color).points(frame.fill);
        }
        for line in &frame.lines {
            draw_line(draw, line, &params);
        }
    }
}
