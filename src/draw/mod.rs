// src/draw/mod.rs
// Output sinks for geometric primitives given in model coordinates.
// The target owns the transform to pixels and the actual rasterization.

pub mod line_draw;
pub mod nannou_target;
pub mod recorder;

pub use line_draw::{draw_lattice, draw_line2d};
pub use nannou_target::NannouTarget;
pub use recorder::{Primitive, RecordingTarget};

use nannou::color::Rgba;

use crate::models::Vec2d;

pub trait DrawTarget {
    /// Segment from `from` to `to`, `width` in pixels
    fn draw_line(&mut self, from: Vec2d, to: Vec2d, width: f32, color: Rgba);

    /// Filled circle, `radius` in pixels
    fn draw_dot(&mut self, center: Vec2d, radius: f32, color: Rgba);

    /// Filled polygon through `points`
    fn draw_polygon(&mut self, points: &[Vec2d], color: Rgba);
}
