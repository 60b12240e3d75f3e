// src/models/viewport.rs
// The part of the plane a render pass covers

use super::geometry::Bounds;

/// Model-space window plus the index range of every pencil
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub bounds: Bounds,
    pub line_min: i32,
    pub line_max: i32,
}

impl Viewport {
    pub fn new(bounds: Bounds, line_min: i32, line_max: i32) -> Self {
        Self {
            bounds,
            line_min,
            line_max,
        }
    }

    /// Square window `[-half_extent, half_extent]` around the origin
    pub fn centered(half_extent: f64, line_min: i32, line_max: i32) -> Self {
        Self::new(Bounds::centered(half_extent), line_min, line_max)
    }
}
