// src/views/camera.rs
//
// Model-to-screen transform: the model point shown at the window centre and
// the number of pixels per model unit.

use nannou::prelude::*;

use crate::models::{Bounds, Vec2d};

/// Smallest allowed zoom, in pixels per unit
pub const MIN_SCALE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub center: Vec2d,
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: Vec2d::zeros(),
            scale: 60.0,
        }
    }
}

impl Camera {
    pub fn new(center: Vec2d, scale: f64) -> Self {
        Self {
            center,
            scale: scale.max(MIN_SCALE),
        }
    }

    pub fn to_screen(&self, point: &Vec2d) -> Point2 {
        let p = (point - self.center) * self.scale;
        pt2(p.x as f32, p.y as f32)
    }

    pub fn to_model(&self, screen: Point2) -> Vec2d {
        Vec2d::new(screen.x as f64, screen.y as f64) / self.scale + self.center
    }

    /// Model-space box covered by a window of `width` x `height` pixels,
    /// enlarged by `overscan` so lines run past the window edges
    pub fn model_bounds(&self, width: f64, height: f64, overscan: f64) -> Bounds {
        let half = Vec2d::new(width, height) * (0.5 * overscan / self.scale);
        Bounds::new(self.center - half, self.center + half)
    }

    /// Move by `delta` given in model units
    pub fn panned(&self, delta: Vec2d) -> Self {
        Self {
            center: self.center + delta,
            ..*self
        }
    }

    /// Multiply the scale by `factor`; non-positive factors are ignored
    pub fn zoomed(&self, factor: f64) -> Self {
        if factor <= 0.0 {
            return *self;
        }
        Self::new(self.center, self.scale * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_camera() {
        let camera = Camera::default();
        assert_eq!(camera.center, Vec2d::zeros());
        assert_eq!(camera.to_screen(&Vec2d::new(1.0, -2.0)), pt2(60.0, -120.0));
    }

    #[test]
    fn test_screen_round_trip() {
        let camera = Camera::new(Vec2d::new(3.0, -1.0), 25.0);
        let screen = camera.to_screen(&Vec2d::new(4.0, 1.0));
        assert!((screen.x - 25.0).abs() < 1e-4);
        assert!((screen.y - 50.0).abs() < 1e-4);

        let back = camera.to_model(screen);
        assert!((back - Vec2d::new(4.0, 1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_model_bounds() {
        let camera = Camera::new(Vec2d::new(1.0, 0.0), 10.0);
        let bounds = camera.model_bounds(200.0, 100.0, 1.5);
        assert_relative_eq!(bounds.low, Vec2d::new(-14.0, -7.5), epsilon = 1e-9);
        assert_relative_eq!(bounds.high, Vec2d::new(16.0, 7.5), epsilon = 1e-9);
    }

    #[test]
    fn test_pan_and_zoom() {
        let camera = Camera::default().panned(Vec2d::new(0.5, 0.5)).zoomed(2.0);
        assert_eq!(camera.center, Vec2d::new(0.5, 0.5));
        assert_eq!(camera.scale, 120.0);
        assert_eq!(camera.zoomed(0.0), camera);
        assert_eq!(camera.zoomed(1e-6).scale, MIN_SCALE);
    }
}
