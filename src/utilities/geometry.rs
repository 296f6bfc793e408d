// src/utilities/geometry.rs
//
// Polygon helpers. nannou has no clip path, so fills are clipped on the CPU.

use nannou::prelude::*;

/// Signed area (shoelace). Positive for counter-clockwise winding.
pub fn signed_area(points: &[Point2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let sum: f32 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    sum / 2.0
}

/// Sutherland-Hodgman: clips `subject` against the convex polygon `clip`.
/// Either winding is accepted for `clip`. Returns an empty vec when nothing
/// remains.
pub fn clip_polygon(subject: &[Point2], clip: &[Point2]) -> Vec<Point2> {
    if clip.len() < 3 {
        return Vec::new();
    }
    let winding = signed_area(clip).signum();
    if winding == 0.0 {
        return Vec::new();
    }

    let mut output: Vec<Point2> = subject.to_vec();

    for (i, &edge_start) in clip.iter().enumerate() {
        if output.is_empty() {
            break;
        }
        let edge_end = clip[(i + 1) % clip.len()];
        let inside = |p: Point2| winding * cross(edge_end - edge_start, p - edge_start) >= 0.0;

        let input = std::mem::take(&mut output);
        for (j, &current) in input.iter().enumerate() {
            let previous = input[(j + input.len() - 1) % input.len()];
            match (inside(previous), inside(current)) {
                (true, true) => output.push(current),
                (true, false) => {
                    output.push(intersection(previous, current, edge_start, edge_end));
                }
                (false, true) => {
                    output.push(intersection(previous, current, edge_start, edge_end));
                    output.push(current);
                }
                (false, false) => (),
            }
        }
    }

    output
}

fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

// intersection of segment a-b with the infinite line through c-d
fn intersection(a: Point2, b: Point2, c: Point2, d: Point2) -> Point2 {
    let ab = b - a;
    let cd = d - c;
    let denom = cross(ab, cd);
    if denom.abs() < f32::EPSILON {
        return b;
    }
    let t = cross(c - a, cd) / denom;
    a + ab * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f32, max: f32) -> Vec<Point2> {
        vec![pt2(min, min), pt2(max, min), pt2(max, max), pt2(min, max)]
    }

    #[test]
    fn test_signed_area_winding() {
        let ccw = square(0.0, 2.0);
        assert_eq!(signed_area(&ccw), 4.0);

        let cw: Vec<Point2> = ccw.iter().rev().cloned().collect();
        assert_eq!(signed_area(&cw), -4.0);

        assert_eq!(signed_area(&[pt2(0.0, 0.0), pt2(1.0, 1.0)]), 0.0);
    }

    #[test]
    fn test_clip_overlapping_squares() {
        let clipped = clip_polygon(&square(0.0, 2.0), &square(1.0, 3.0));
        assert!((signed_area(&clipped).abs() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_clip_accepts_clockwise_clip_polygon() {
        let clip: Vec<Point2> = square(1.0, 3.0).into_iter().rev().collect();
        let clipped = clip_polygon(&square(0.0, 2.0), &clip);
        assert!((signed_area(&clipped).abs() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_clip_disjoint_is_empty() {
        let clipped = clip_polygon(&square(0.0, 1.0), &square(5.0, 6.0));
        assert!(clipped.is_empty());
    }

    #[test]
    fn test_clip_rect_against_triangle() {
        // right triangle with legs of 4, area 8
        let triangle = vec![pt2(0.0, 0.0), pt2(4.0, 0.0), pt2(0.0, 4.0)];

        let whole = clip_polygon(&square(-1.0, 5.0), &triangle);
        assert!((signed_area(&whole).abs() - 8.0).abs() < 1e-4);

        // left half strip x in [0, 2]: 8 - (2*2/2) = 6
        let strip = vec![pt2(0.0, 0.0), pt2(2.0, 0.0), pt2(2.0, 4.0), pt2(0.0, 4.0)];
        let half = clip_polygon(&strip, &triangle);
        assert!((signed_area(&half).abs() - 6.0).abs() < 1e-4);
    }
}
