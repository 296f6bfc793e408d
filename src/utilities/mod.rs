pub mod easing;
pub mod geometry;

pub use easing::{clamp_decay, ease, lerp, lerp_point, segment_progress, segment_scale};
pub use geometry::{clip_polygon, signed_area};
