// src/services/math_pentagrid.rs
//
// Pentagrid operations in plane coordinates: grid membership, the explicit
// line pencils and the rhombus dual to a grid intersection.

use crate::errors::{PentagridError, Result};
use crate::models::pentagrid_map::{to_complex, to_point};
use crate::models::{Lattice, PentagridMap, Vec2d, GRID_COUNT};

/// Corners of the unit square in the `(r, s)` sub-lattice, in rotational order
const RHOMBUS_CORNERS: [(i64, i64); 4] = [(0, 0), (0, 1), (1, 1), (1, 0)];

#[derive(Debug, Clone, Copy)]
pub struct MathPentagrid {
    map: PentagridMap,
}

impl MathPentagrid {
    pub fn new(map: PentagridMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &PentagridMap {
        &self.map
    }

    pub fn is_on_grid(&self, point: &Vec2d, j: usize) -> bool {
        self.map.is_on_grid(to_complex(point), j)
    }

    /// Lines `index_min..=index_max` of pencil `j`
    pub fn grid_lattice(&self, j: usize, index_min: i32, index_max: i32) -> Result<Lattice> {
        self.map.solution_space(j, index_min, index_max)
    }

    /// The same index range for all five pencils, ordered by grid index
    pub fn grid_lattices(&self, index_min: i32, index_max: i32) -> Result<Vec<Lattice>> {
        (0..GRID_COUNT)
            .map(|j| self.grid_lattice(j, index_min, index_max))
            .collect()
    }

    /// The five integers naming the rhombus cell that contains `point`
    pub fn grid_indices(&self, point: &Vec2d) -> [i64; GRID_COUNT] {
        self.map.r5_to_r5(&self.map.complex_to_r5(to_complex(point)))
    }

    /// Vertices of the rhombus dual to the crossing of grids `r` and `s` at
    /// `point`, in an order that traces a convex quadrilateral.
    pub fn rhombus_vertices(&self, point: &Vec2d, r: usize, s: usize) -> Result<[Vec2d; 4]> {
        for j in [r, s] {
            if j >= GRID_COUNT {
                return Err(PentagridError::GridIndexOutOfRange(j));
            }
        }

        let indices = self.grid_indices(point);
        Ok(RHOMBUS_CORNERS.map(|(dr, ds)| {
            let mut corner = indices;
            corner[r] += dr;
            corner[s] += ds;
            to_point(self.map.r5_to_complex(&corner))
        }))
    }
}
