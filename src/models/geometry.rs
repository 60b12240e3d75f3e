// src/models/geometry.rs
// Shared 2D types and helpers for working with lines and boxes

/// 2D vector / point in model space.
pub type Vec2d = nalgebra::Vector2<f64>;

/// Tolerance used for "same line" and "on grid" comparisons.
pub const GEOMETRY_EPSILON: f64 = 1e-10;

/// Axis-aligned box from `low` (bottom-left) to `high` (top-right), inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub low: Vec2d,
    pub high: Vec2d,
}

impl Bounds {
    pub fn new(low: Vec2d, high: Vec2d) -> Self {
        Self { low, high }
    }

    /// Square box `[-half_extent, half_extent]` on both axes
    pub fn centered(half_extent: f64) -> Self {
        Self {
            low: Vec2d::new(-half_extent, -half_extent),
            high: Vec2d::new(half_extent, half_extent),
        }
    }

    pub fn width(&self) -> f64 {
        self.high.x - self.low.x
    }

    pub fn height(&self) -> f64 {
        self.high.y - self.low.y
    }

    /// Inclusive containment test with a small tolerance on every edge
    pub fn contains(&self, p: &Vec2d) -> bool {
        (0..2).all(|k| {
            p[k] >= self.low[k] - GEOMETRY_EPSILON && p[k] <= self.high[k] + GEOMETRY_EPSILON
        })
    }

    /// Largest distance from the origin to any corner
    pub fn reach(&self) -> f64 {
        Vec2d::new(
            self.low.x.abs().max(self.high.x.abs()),
            self.low.y.abs().max(self.high.y.abs()),
        )
        .norm()
    }

    /// Clip the segment `a`-`b` against this box (Liang-Barsky).
    /// Returns the visible part, or `None` if the segment misses the box.
    pub fn clip_segment(&self, a: &Vec2d, b: &Vec2d) -> Option<(Vec2d, Vec2d)> {
        let d = b - a;
        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;

        for k in 0..2 {
            for (p, q) in [(-d[k], a[k] - self.low[k]), (d[k], self.high[k] - a[k])] {
                if p == 0.0 {
                    // parallel to this edge: either fully outside or irrelevant
                    if q < 0.0 {
                        return None;
                    }
                    continue;
                }
                let r = q / p;
                if p < 0.0 {
                    if r > t1 {
                        return None;
                    }
                    t0 = t0.max(r);
                } else {
                    if r < t0 {
                        return None;
                    }
                    t1 = t1.min(r);
                }
            }
        }

        Some((a + d * t0, a + d * t1))
    }
}

/// Orthogonally project `point` onto the line through `start` with direction `direction`.
/// Returns `None` for a zero direction.
pub fn project_point_line(point: &Vec2d, start: &Vec2d, direction: &Vec2d) -> Option<Vec2d> {
    let unit = direction.try_normalize(0.0)?;
    let param = unit.dot(&(point - start));
    Some(start + unit * param)
}

/// z-component of the 2D cross product
pub fn cross(a: &Vec2d, b: &Vec2d) -> f64 {
    a.x * b.y - a.y * b.x
}
