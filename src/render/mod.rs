// src/render/mod.rs
// Shape rendering and the tap-driven render loop

pub mod renderer;
pub mod shape_renderer;

pub use renderer::Renderer;
pub use crate::draw::LineSegment;
pub use shape_renderer::{ShapeFrame, ShapeGeometry, ShapeRenderer};
