// src/render/fibonacci_renderer.rs
//
// Square-lattice cut-and-project scene: the integer grid, the cutting line,
// its crossings, the visited cells and the resulting 1D strip drawn below.

use nannou::color::{rgba, Rgba};

use crate::draw::{draw_line2d, DrawTarget};
use crate::models::{Bounds, Line2D, Vec2d};
use crate::services::{FibonacciStrip, StepAxis};

/// Gap between the bottom of the grid and the 1D strip, in model units
const STRIP_GAP: f64 = 1.5;

#[derive(Debug, Clone)]
pub struct FibonacciStyle {
    pub grid: Rgba,
    pub line: Rgba,
    pub x_crossing: Rgba,
    pub y_crossing: Rgba,
    pub midpoint: Rgba,
    pub cell_center: Rgba,
    pub projection: Rgba,
    pub long_step: Rgba,
    pub short_step: Rgba,
}

impl Default for FibonacciStyle {
    fn default() -> Self {
        Self {
            grid: rgba(0.5, 0.5, 0.5, 0.4),
            line: rgba(1.0, 1.0, 1.0, 1.0),
            x_crossing: rgba(1.0, 0.0, 0.0, 1.0),
            y_crossing: rgba(0.0, 1.0, 0.0, 1.0),
            midpoint: rgba(1.0, 1.0, 0.0, 0.8),
            cell_center: rgba(0.3, 0.5, 1.0, 1.0),
            projection: rgba(0.3, 0.5, 1.0, 0.5),
            long_step: rgba(0.95, 0.55, 0.2, 1.0),
            short_step: rgba(0.2, 0.75, 0.9, 1.0),
        }
    }
}

#[derive(Default)]
pub struct FibonacciRenderer {
    pub style: FibonacciStyle,
}

impl FibonacciRenderer {
    pub fn new(style: FibonacciStyle) -> Self {
        Self { style }
    }

    /// Draw the construction for `line` inside `bounds` and return the strip
    pub fn render<T: DrawTarget + ?Sized>(
        &self,
        line: &Line2D,
        bounds: &Bounds,
        target: &mut T,
    ) -> FibonacciStrip {
        let strip = FibonacciStrip::build(line, bounds);
        let style = &self.style;

        self.draw_integer_grid(bounds, target);
        draw_line2d(target, line, bounds, style.line);

        for &t in &strip.x_crossings {
            target.draw_dot(line.evaluate(t), 4.0, style.x_crossing);
        }
        for &t in &strip.y_crossings {
            target.draw_dot(line.evaluate(t), 4.0, style.y_crossing);
        }
        for corner in &strip.corners {
            target.draw_dot(*corner, 5.0, style.line);
        }
        for midpoint in &strip.midpoints {
            target.draw_dot(*midpoint, 2.0, style.midpoint);
        }
        for (center, projected) in strip.cell_centers.iter().zip(&strip.projections) {
            target.draw_dot(*center, 3.0, style.cell_center);
            target.draw_line(*center, *projected, 1.0, style.projection);
        }

        self.draw_strip(&strip, bounds, target);
        strip
    }

    fn draw_integer_grid<T: DrawTarget + ?Sized>(&self, bounds: &Bounds, target: &mut T) {
        let (x0, x1) = (bounds.low.x.ceil() as i64, bounds.high.x.floor() as i64);
        let (y0, y1) = (bounds.low.y.ceil() as i64, bounds.high.y.floor() as i64);
        for x in x0..=x1 {
            let x = x as f64;
            target.draw_line(
                Vec2d::new(x, bounds.low.y),
                Vec2d::new(x, bounds.high.y),
                1.0,
                self.style.grid,
            );
        }
        for y in y0..=y1 {
            let y = y as f64;
            target.draw_line(
                Vec2d::new(bounds.low.x, y),
                Vec2d::new(bounds.high.x, y),
                1.0,
                self.style.grid,
            );
        }
    }

    /// Lay the strip out horizontally below the grid, centred on its midpoint
    fn draw_strip<T: DrawTarget + ?Sized>(&self, strip: &FibonacciStrip, bounds: &Bounds, target: &mut T) {
        let (Some(first), Some(last)) = (strip.segments.first(), strip.segments.last()) else {
            return;
        };
        let y = bounds.low.y - STRIP_GAP;
        let shift = bounds.low.x + 0.5 * bounds.width() - 0.5 * (first.start + last.end);

        for segment in &strip.segments {
            let color = match segment.axis {
                StepAxis::X => self.style.long_step,
                StepAxis::Y => self.style.short_step,
            };
            let from = Vec2d::new(segment.start + shift, y);
            let to = Vec2d::new(segment.end + shift, y);
            target.draw_line(from, to, 4.0, color);
            target.draw_dot(from, 2.5, self.style.line);
        }
        target.draw_dot(Vec2d::new(last.end + shift, y), 2.5, self.style.line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RecordingTarget;
    use crate::models::PHI;

    #[test]
    fn test_render_draws_construction_and_strip() {
        let renderer = FibonacciRenderer::default();
        let mut target = RecordingTarget::new();
        let line = Line2D::new(0.3, (1.0 / PHI).atan());
        let bounds = Bounds::centered(10.0);
        let strip = renderer.render(&line, &bounds, &mut target);

        let grid_lines = 21 * 2;
        let projections = strip.projections.len();
        let segments = strip.segments.len();
        assert_eq!(
            target.lines().count(),
            grid_lines + 1 + projections + segments
        );

        // strip sits below the grid
        let below = target.lines().filter(|(a, _, _)| a.y < bounds.low.y - 1.0).count();
        assert_eq!(below, segments);
    }

    #[test]
    fn test_line_outside_grid_draws_only_grid() {
        let renderer = FibonacciRenderer::default();
        let mut target = RecordingTarget::new();
        let strip = renderer.render(&Line2D::new(40.0, 0.2), &Bounds::centered(2.0), &mut target);
        assert!(strip.segments.is_empty());
        assert_eq!(target.lines().count(), 10);
        assert_eq!(target.dots().count(), 0);
    }
}
