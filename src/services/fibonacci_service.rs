// src/services/fibonacci_service.rs
//
// Cut-and-project in the square lattice. A line crosses the unit cells of
// the integer grid; projecting the cell centres back onto the line yields a
// one-dimensional quasiperiodic (Fibonacci) sequence of long and short steps.

use crate::models::geometry::GEOMETRY_EPSILON;
use crate::models::{Bounds, Line2D, Vec2d};
use crate::utilities::{
    closest_half_point, closest_integral_point, merge_sorted_by, project_point_line,
};

/// How close a crossing must come to a lattice point to count as a corner
const CORNER_TOLERANCE: f64 = 1e-9;

/// Direction of one step between neighbouring cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAxis {
    X,
    Y,
}

/// One piece of the 1D strip, as signed positions along the line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripSegment {
    pub axis: StepAxis,
    pub start: f64,
    pub end: f64,
}

impl StripSegment {
    pub fn length(&self) -> f64 {
        (self.end - self.start).abs()
    }
}

#[derive(Debug, Clone)]
pub struct FibonacciStrip {
    pub line: Line2D,
    pub bounds: Bounds,
    /// Parameters where the line has an integer x coordinate
    pub x_crossings: Vec<f64>,
    /// Parameters where the line has an integer y coordinate
    pub y_crossings: Vec<f64>,
    /// Both lists merged; a crossing through a lattice corner appears once
    pub crossings: Vec<f64>,
    /// Lattice points the line passes through exactly
    pub corners: Vec<Vec2d>,
    /// Points of the line halfway between consecutive crossings
    pub midpoints: Vec<Vec2d>,
    /// Centres of the cells the line passes through
    pub cell_centers: Vec<Vec2d>,
    /// Cell centres projected onto the line
    pub projections: Vec<Vec2d>,
    pub segments: Vec<StripSegment>,
}

impl FibonacciStrip {
    pub fn build(line: &Line2D, bounds: &Bounds) -> Self {
        let x_crossings = line.integral_crossings(0, bounds);
        let y_crossings = line.integral_crossings(1, bounds);

        let mut crossings = merge_sorted_by(&x_crossings, &y_crossings, f64::total_cmp);
        crossings.dedup_by(|b, a| (*b - *a).abs() <= GEOMETRY_EPSILON);

        let corners: Vec<Vec2d> = crossings
            .iter()
            .map(|&t| line.evaluate(t))
            .map(|p| (p, closest_integral_point(&p)))
            .filter(|(p, corner)| (p - corner).norm() <= CORNER_TOLERANCE)
            .map(|(_, corner)| corner)
            .collect();

        let midpoints: Vec<Vec2d> = crossings
            .windows(2)
            .map(|pair| line.evaluate(0.5 * (pair[0] + pair[1])))
            .collect();
        let cell_centers: Vec<Vec2d> = midpoints.iter().map(closest_half_point).collect();

        let (start, direction) = (line.start(), line.direction());
        let projections: Vec<Vec2d> = cell_centers
            .iter()
            .filter_map(|center| project_point_line(center, &start, &direction))
            .collect();

        let position = |p: &Vec2d| (p - start).dot(&direction);
        let segments = cell_centers
            .windows(2)
            .zip(projections.windows(2))
            .map(|(cells, projected)| {
                let step = cells[1] - cells[0];
                StripSegment {
                    axis: if step.x.abs() >= step.y.abs() {
                        StepAxis::X
                    } else {
                        StepAxis::Y
                    },
                    start: position(&projected[0]),
                    end: position(&projected[1]),
                }
            })
            .collect();

        Self {
            line: *line,
            bounds: *bounds,
            x_crossings,
            y_crossings,
            crossings,
            corners,
            midpoints,
            cell_centers,
            projections,
            segments,
        }
    }

    pub fn steps(&self) -> Vec<StepAxis> {
        self.segments.iter().map(|segment| segment.axis).collect()
    }

    /// The step sequence as text, `L` for x steps and `S` for y steps
    pub fn word(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment.axis {
                StepAxis::X => 'L',
                StepAxis::Y => 'S',
            })
            .collect()
    }
}
