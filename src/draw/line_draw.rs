// src/draw/line_draw.rs
// Draws infinite lines and whole pencils clipped to a box

use nannou::color::Rgba;

use super::DrawTarget;
use crate::models::line::DRAW_PARAM_RANGE;
use crate::models::{Bounds, Lattice, Line2D};

pub const LINE_WIDTH: f32 = 1.0;
/// Radius of the dot marking the far end of a drawn line
pub const END_DOT_RADIUS: f32 = 2.0;

/// Draw the visible part of `line` with a dot at its far end.
/// Returns false if the line misses `bounds`.
pub fn draw_line2d<T: DrawTarget + ?Sized>(
    target: &mut T,
    line: &Line2D,
    bounds: &Bounds,
    color: Rgba,
) -> bool {
    let Some((t1, t2)) = line.bounding_params(bounds, -DRAW_PARAM_RANGE, DRAW_PARAM_RANGE) else {
        return false;
    };
    let end = line.evaluate(t2);
    target.draw_line(line.evaluate(t1), end, LINE_WIDTH, color);
    target.draw_dot(end, END_DOT_RADIUS, color);
    true
}

/// Draw every line of `lattice`; returns how many were visible
pub fn draw_lattice<T: DrawTarget + ?Sized>(
    target: &mut T,
    lattice: &Lattice,
    bounds: &Bounds,
    color: Rgba,
) -> usize {
    lattice
        .lines()
        .filter(|line| draw_line2d(target, line, bounds, color))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RecordingTarget;
    use crate::models::Vec2d;
    use approx::assert_relative_eq;
    use nannou::color::rgba;

    #[test]
    fn test_line_is_clipped_to_bounds() {
        let mut target = RecordingTarget::new();
        let line = Line2D::new(-1.0, 0.0);
        assert!(draw_line2d(&mut target, &line, &Bounds::centered(3.0), rgba(1.0, 0.0, 0.0, 1.0)));

        let lines: Vec<_> = target.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_relative_eq!(*lines[0].0, Vec2d::new(-3.0, 1.0), epsilon = 1e-9);
        assert_relative_eq!(*lines[0].1, Vec2d::new(3.0, 1.0), epsilon = 1e-9);

        let dots: Vec<_> = target.dots().collect();
        assert_eq!(dots.len(), 1);
        assert_relative_eq!(*dots[0].0, Vec2d::new(3.0, 1.0), epsilon = 1e-9);
    }

    #[test]
    fn test_line_outside_bounds_draws_nothing() {
        let mut target = RecordingTarget::new();
        let line = Line2D::new(10.0, 0.5);
        assert!(!draw_line2d(&mut target, &line, &Bounds::centered(3.0), rgba(1.0, 1.0, 1.0, 1.0)));
        assert!(target.primitives.is_empty());
    }

    #[test]
    fn test_draw_lattice_counts_visible_lines() {
        let mut target = RecordingTarget::new();
        // horizontal lines at y = -4 ..= 4, only |y| <= 2 are visible
        let lattice = Lattice::new(Line2D::new(0.0, 0.0), -4, 4, 1.0, 0.0);
        let visible = draw_lattice(&mut target, &lattice, &Bounds::centered(2.0), rgba(0.0, 0.0, 1.0, 0.5));
        assert_eq!(visible, 5);
        assert_eq!(target.lines().count(), 5);
    }
}
