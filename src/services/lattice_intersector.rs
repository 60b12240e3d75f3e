// src/services/lattice_intersector.rs
//
// All crossings between pencils of parallel lines. The crossings of two
// pencils form an affine lattice, so three line intersections are enough to
// place every one of them.

use log::{debug, trace};
use rayon::prelude::*;

use crate::models::{Lattice, Vec2d};

/// A crossing of a line from pencil `r` with a line from pencil `s`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeIntersection {
    pub point: Vec2d,
    pub r: usize,
    pub s: usize,
}

/// Every crossing of `first` with `second`, `first`'s index varying fastest.
/// Empty when the pencils are parallel, either one has no lines, or the
/// crossing count overflows `usize`.
pub fn intersect_lattices(first: &Lattice, second: &Lattice) -> Vec<Vec2d> {
    let (count1, count2) = (first.line_count(), second.line_count());
    let Some(total) = count1.checked_mul(count2).filter(|&n| n > 0) else {
        return Vec::new();
    };

    let (line1, line2) = (first.first_line(), second.first_line());
    let (shifted1, shifted2) = (first.second_line(), second.second_line());

    let (Some(origin), Some(intersect1), Some(intersect2)) = (
        line1.intersect(&line2),
        shifted1.intersect(&line2),
        line1.intersect(&shifted2),
    ) else {
        return Vec::new();
    };

    let step1 = intersect1 - origin;
    let step2 = intersect2 - origin;

    let mut points = Vec::with_capacity(total);
    for j in 0..count2 {
        let row = origin + step2 * j as f64;
        for i in 0..count1 {
            points.push(row + step1 * i as f64);
        }
    }
    points
}

/// Crossings of every pencil pair of a multigrid
pub struct LatticeIntersector<'a> {
    lattices: &'a [Lattice],
}

impl<'a> LatticeIntersector<'a> {
    pub fn new(lattices: &'a [Lattice]) -> Self {
        Self { lattices }
    }

    /// Pencil pairs `(r, s)` with `r < s`, in row-major order
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        let n = self.lattices.len();
        (0..n)
            .flat_map(|r| (r + 1..n).map(move |s| (r, s)))
            .filter(|&(r, s)| r + s != 0)
            .collect()
    }

    /// Crossings of pencils `r` and `s`, tagged with their origin
    pub fn pair_intersections(&self, r: usize, s: usize) -> Vec<LatticeIntersection> {
        let (Some(first), Some(second)) = (self.lattices.get(r), self.lattices.get(s)) else {
            return Vec::new();
        };

        let points = intersect_lattices(first, second);
        if points.is_empty() {
            debug!("pencils {r} and {s} do not cross, skipped");
        } else {
            trace!("pencils {r} and {s}: {} crossings", points.len());
        }
        points
            .into_iter()
            .map(|point| LatticeIntersection { point, r, s })
            .collect()
    }

    /// Every tagged crossing, grouped by pair in `(r, s)` order. Pairs are
    /// computed in parallel; the output order does not depend on scheduling.
    pub fn intersections(&self) -> Vec<LatticeIntersection> {
        self.pairs()
            .par_iter()
            .map(|&(r, s)| self.pair_intersections(r, s))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }
}
