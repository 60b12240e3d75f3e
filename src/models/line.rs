// src/models/line.rs
//
// Infinite 2D line in normal form: an angle plus a signed distance from the
// origin, measured along the normal. Shifting `dist_to_origin` moves the line
// sideways and keeps its direction, which is how a Lattice enumerates its
// parallel lines.

use super::geometry::{Bounds, Vec2d, GEOMETRY_EPSILON};
use crate::errors::{PentagridError, Result};

/// Parameter range used when a line is drawn or bounded "without limits".
pub const DRAW_PARAM_RANGE: f64 = 1000.0;

#[derive(Debug, Clone, Copy)]
pub struct Line2D {
    /// Signed distance from the origin along the normal
    pub dist_to_origin: f64,
    angle: f64,
    direction: Vec2d,
}

impl Line2D {
    pub fn new(dist_to_origin: f64, angle: f64) -> Self {
        Self {
            dist_to_origin,
            angle,
            direction: Vec2d::new(angle.cos(), angle.sin()),
        }
    }

    /// Same line shifted to a new distance from the origin
    pub fn with_distance(&self, dist_to_origin: f64) -> Self {
        Self {
            dist_to_origin,
            ..*self
        }
    }

    /// Angle of the direction in radians
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
        self.direction = Vec2d::new(angle.cos(), angle.sin());
    }

    /// Unit direction vector
    pub fn direction(&self) -> Vec2d {
        self.direction
    }

    /// Point the line along `direction`. The vector is normalized; a zero
    /// vector is rejected and leaves the line untouched.
    pub fn set_direction(&mut self, direction: Vec2d) -> Result<()> {
        let unit = direction
            .try_normalize(0.0)
            .ok_or(PentagridError::ZeroDirection)?;
        self.direction = unit;
        self.angle = unit.y.atan2(unit.x);
        Ok(())
    }

    /// Unit normal, direction rotated clockwise by 90 degrees
    pub fn normal(&self) -> Vec2d {
        Vec2d::new(self.direction.y, -self.direction.x)
    }

    /// The point at parameter 0
    pub fn start(&self) -> Vec2d {
        self.normal() * self.dist_to_origin
    }

    pub fn evaluate(&self, param: f64) -> Vec2d {
        self.start() + self.direction * param
    }

    /// Parameter whose point has coordinate `value` in dimension `dim` (0 = x, 1 = y).
    /// `None` when the line runs parallel to that axis.
    pub fn param_at(&self, dim: usize, value: f64) -> Option<f64> {
        let d = self.direction[dim];
        if d == 0.0 {
            return None;
        }
        Some((value - self.normal()[dim] * self.dist_to_origin) / d)
    }

    /// Parameters of the two points where the part of the line between
    /// `param_min` and `param_max` enters and leaves `bounds`.
    pub fn bounding_params(
        &self,
        bounds: &Bounds,
        param_min: f64,
        param_max: f64,
    ) -> Option<(f64, f64)> {
        let (a, b) =
            bounds.clip_segment(&self.evaluate(param_min), &self.evaluate(param_max))?;
        if a == b {
            return None;
        }

        // solve on the dominant axis, the other component may be close to zero
        let dim = if self.direction.x.abs() > self.direction.y.abs() {
            0
        } else {
            1
        };
        Some((self.param_at(dim, a[dim])?, self.param_at(dim, b[dim])?))
    }

    /// Every parameter whose point has an integer coordinate in dimension
    /// `dim` and lies inside `bounds` (inclusive), sorted ascending.
    pub fn integral_crossings(&self, dim: usize, bounds: &Bounds) -> Vec<f64> {
        if self.direction[dim] == 0.0 {
            return Vec::new();
        }

        // any point of the box is at most this far from the start point
        let reach = bounds.reach() + self.dist_to_origin.abs() + 1.0;
        let Some((param1, param2)) = self.bounding_params(bounds, -reach, reach) else {
            return Vec::new();
        };

        let (p1, p2) = (self.evaluate(param1), self.evaluate(param2));
        let lo = p1[dim].min(p2[dim]).floor() as i64;
        let hi = p1[dim].max(p2[dim]).ceil() as i64;

        let mut params: Vec<f64> = (lo..=hi)
            .filter_map(|value| self.param_at(dim, value as f64))
            .filter(|&param| bounds.contains(&self.evaluate(param)))
            .collect();
        params.sort_by(f64::total_cmp);
        params
    }

    pub fn is_parallel(&self, other: &Line2D) -> bool {
        (self.angle - other.angle).abs() <= GEOMETRY_EPSILON
    }

    /// Intersection point with `other`, `None` for parallel lines.
    pub fn intersect(&self, other: &Line2D) -> Option<Vec2d> {
        let (s1, d1) = (self.start(), self.direction);
        let (s2, d2) = (other.start(), other.direction);

        if (d1.x == 0.0 && d2.x == 0.0) || (d1.y == 0.0 && d2.y == 0.0) {
            return None;
        }
        let det = d1.x * d2.y - d1.y * d2.x;
        if det.abs() <= f64::EPSILON {
            return None;
        }

        let param = (d2.x * (s1.y - s2.y) + d2.y * (s2.x - s1.x)) / det;
        Some(self.evaluate(param))
    }
}

impl PartialEq for Line2D {
    fn eq(&self, other: &Self) -> bool {
        self.is_parallel(other)
            && (self.dist_to_origin - other.dist_to_origin).abs() <= GEOMETRY_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_intersection_unit_lines() {
        let horizontal = Line2D::new(-1.0, 0.0);
        let vertical = Line2D::new(1.0, PI / 2.0);
        let point = horizontal.intersect(&vertical).unwrap();
        assert_relative_eq!(point, Vec2d::new(1.0, 1.0), epsilon = 1e-10);
    }

    #[test]
    fn test_intersection_after_set_direction() {
        let mut horizontal = Line2D::new(-1.0, 0.0);
        horizontal.set_direction(Vec2d::new(2.0, 0.0)).unwrap();
        assert_relative_eq!(horizontal.direction().norm(), 1.0);

        let vertical = Line2D::new(1.0, PI / 2.0);
        let point = horizontal.intersect(&vertical).unwrap();
        assert_relative_eq!(point, Vec2d::new(1.0, 1.0), epsilon = 1e-10);
    }

    #[test]
    fn test_set_direction_rejects_zero() {
        let mut line = Line2D::new(0.5, 0.3);
        assert!(matches!(
            line.set_direction(Vec2d::zeros()),
            Err(PentagridError::ZeroDirection)
        ));
        assert_eq!(line.angle(), 0.3);
    }

    #[test]
    fn test_angle_and_direction_stay_consistent() {
        let mut line = Line2D::new(0.0, 0.0);
        line.set_angle(PI / 3.0);
        assert_relative_eq!(line.direction(), Vec2d::new(0.5, 3f64.sqrt() / 2.0), epsilon = 1e-12);

        line.set_direction(Vec2d::new(0.0, -3.0)).unwrap();
        assert_relative_eq!(line.angle(), -PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_start_lies_on_normal() {
        let line = Line2D::new(2.0, 0.7);
        assert_relative_eq!(line.start().norm(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(line.start().dot(&line.direction()), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_intersection_lies_on_both_lines() {
        let angles = [0.1, 0.9, 1.7, 2.3, 3.0, -1.2];
        let dists = [-2.5, -0.3, 0.0, 1.1, 4.0];
        for (i, &a1) in angles.iter().enumerate() {
            for &a2 in &angles[i + 1..] {
                for &d1 in &dists {
                    for &d2 in &dists {
                        let l1 = Line2D::new(d1, a1);
                        let l2 = Line2D::new(d2, a2);
                        let p = l1.intersect(&l2).unwrap();

                        // the point re-evaluated from its parameter on each line
                        for line in [&l1, &l2] {
                            let dim = if line.direction().x.abs() > line.direction().y.abs() {
                                0
                            } else {
                                1
                            };
                            let param = line.param_at(dim, p[dim]).unwrap();
                            assert_relative_eq!(line.evaluate(param), p, epsilon = 1e-9);
                        }

                        // symmetric
                        let q = l2.intersect(&l1).unwrap();
                        assert_relative_eq!(p, q, epsilon = 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn test_parallel_lines_do_not_intersect() {
        for angle in [0.0, 0.4, PI / 2.0, 2.0] {
            let l1 = Line2D::new(1.0, angle);
            assert!(l1.intersect(&l1.with_distance(3.0)).is_none());
            assert!(l1.intersect(&l1).is_none());
        }
    }

    #[test]
    fn test_equality_and_parallelism() {
        let l1 = Line2D::new(1.0, 0.5);
        assert_eq!(l1, Line2D::new(1.0 + 1e-12, 0.5));
        assert_ne!(l1, Line2D::new(1.1, 0.5));
        assert_ne!(l1, Line2D::new(1.0, 0.6));
        assert!(l1.is_parallel(&l1.with_distance(-4.0)));
    }

    #[test]
    fn test_param_at_axis_parallel() {
        let horizontal = Line2D::new(-1.0, 0.0);
        assert!(horizontal.param_at(1, 3.0).is_none());
        assert_relative_eq!(horizontal.param_at(0, 3.0).unwrap(), 3.0);
    }

    #[test]
    fn test_bounding_params() {
        // y = 1, from x = -3 to x = 3
        let line = Line2D::new(-1.0, 0.0);
        let bounds = Bounds::centered(3.0);
        let (t1, t2) = line.bounding_params(&bounds, -10.0, 10.0).unwrap();
        assert_relative_eq!(t1, -3.0, epsilon = 1e-12);
        assert_relative_eq!(t2, 3.0, epsilon = 1e-12);

        // restricted parameter range
        let (t1, t2) = line.bounding_params(&bounds, 1.0, 10.0).unwrap();
        assert_relative_eq!(t1, 1.0, epsilon = 1e-12);
        assert_relative_eq!(t2, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bounding_params_miss() {
        let line = Line2D::new(-5.0, 0.0);
        assert!(line
            .bounding_params(&Bounds::centered(3.0), -10.0, 10.0)
            .is_none());
    }

    #[test]
    fn test_integral_crossings_diagonal() {
        // y = x + 1
        let line = Line2D::new(-(0.5f64).sqrt(), PI / 4.0);
        let bounds = Bounds::centered(2.5);
        let params = line.integral_crossings(0, &bounds);

        let xs: Vec<f64> = params.iter().map(|&t| line.evaluate(t).x).collect();
        assert_eq!(xs.len(), 4);
        for (x, expected) in xs.iter().zip([-2.0, -1.0, 0.0, 1.0]) {
            assert_relative_eq!(*x, expected, epsilon = 1e-9);
        }
        assert!(params.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_integral_crossings_sorted_for_negative_direction() {
        let line = Line2D::new(0.25, 2.5);
        let bounds = Bounds::centered(4.0);
        for dim in 0..2 {
            let params = line.integral_crossings(dim, &bounds);
            assert!(!params.is_empty());
            assert!(params.windows(2).all(|w| w[0] < w[1]));
            for t in params {
                let p = line.evaluate(t);
                assert_relative_eq!(p[dim], p[dim].round(), epsilon = 1e-9);
                assert!(bounds.contains(&p));
            }
        }
    }

    #[test]
    fn test_integral_crossings_outside_box() {
        let line = Line2D::new(-20.0, 0.3);
        assert!(line
            .integral_crossings(0, &Bounds::centered(5.0))
            .is_empty());
    }

    #[test]
    fn test_integral_crossings_axis_parallel() {
        let line = Line2D::new(-0.5, 0.0);
        assert!(line
            .integral_crossings(1, &Bounds::centered(5.0))
            .is_empty());
        assert_eq!(line.integral_crossings(0, &Bounds::centered(5.0)).len(), 11);
    }
}
