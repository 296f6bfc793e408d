// src/draw/line_draw.rs
//
// A single stroked segment, optionally cut short toward its target.

use nannou::prelude::*;

use super::DrawParams;
use crate::utilities::lerp_point;

/// A segment drawn `progress` of the way from `start` to `target`.
/// A progress of 1.0 is the whole segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point2,
    pub target: Point2,
    pub progress: f32,
}

impl LineSegment {
    pub fn end(&self) -> Point2 {
        lerp_point(self.start, self.target, self.progress)
    }

    pub fn is_visible(&self) -> bool {
        self.progress > 0.0
    }
}

/// Nothing is drawn at or below zero progress.
pub fn draw_line(draw: &Draw, line: &LineSegment, params: &DrawParams) {
    if !line.is_visible() {
        return;
    }
    draw.line()
        .points(line.start, line.end())
        .color(params.color)
        .stroke_weight(params.stroke_weight)
        .caps_round();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_follows_progress() {
        let line = LineSegment {
            start: pt2(0.0, 0.0),
            target: pt2(8.0, -4.0),
            progress: 0.25,
        };
        assert_eq!(line.end(), pt2(2.0, -1.0));
        assert!(line.is_visible());

        let hidden = LineSegment { progress: 0.0, ..line };
        assert_eq!(hidden.end(), hidden.start);
        assert!(!hidden.is_visible());
    }
}
