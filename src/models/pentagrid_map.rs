// src/models/pentagrid_map.rs
//
// Maps between the complex plane, R5 and the integer lattice Z5 for one
// choice of gamma offsets and rotation factors.

use log::{debug, warn};
use num_complex::Complex64;
use std::f64::consts::FRAC_PI_2;

use super::geometry::{Vec2d, GEOMETRY_EPSILON};
use super::lattice::Lattice;
use super::line::Line2D;
use super::parameters::{TilingParameters, GRID_COUNT};
use crate::errors::{PentagridError, Result};

/// Decimal places kept by [`PentagridMap::complex_to_r5`] before the ceiling step
const R5_DECIMALS: i32 = 10;

pub fn to_complex(point: &Vec2d) -> Complex64 {
    Complex64::new(point.x, point.y)
}

pub fn to_point(z: Complex64) -> Vec2d {
    Vec2d::new(z.re, z.im)
}

fn round_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PentagridMap {
    params: TilingParameters,
}

impl PentagridMap {
    /// Build a map and check that both rotation factor sums vanish.
    /// The gamma sum is only reported, a drifting sum still yields a (skewed) tiling.
    pub fn new(params: TilingParameters) -> Result<Self> {
        params.validate()?;
        let gamma_sum = params.gamma_sum();
        if gamma_sum.abs() > GEOMETRY_EPSILON {
            warn!("gamma sums to {gamma_sum:.4}, the tiling will not be edge-to-edge");
        } else {
            debug!("pentagrid map validated, gamma = {:?}", params.gamma);
        }
        Ok(Self { params })
    }

    /// Build a map without validation. Used for per-frame parameters that the
    /// controls may have pushed away from the valid configuration.
    pub fn unvalidated(params: TilingParameters) -> Self {
        Self { params }
    }

    pub fn parameters(&self) -> &TilingParameters {
        &self.params
    }

    /// `Re(z * conj(f_k)) + gamma_k` for every pencil, rounded to 10 decimals
    pub fn complex_to_r5(&self, z: Complex64) -> [f64; GRID_COUNT] {
        let forward = self.params.forward_factors();
        std::array::from_fn(|k| {
            round_decimals((z * forward[k]).re + self.params.gamma[k], R5_DECIMALS)
        })
    }

    /// Component-wise ceiling: the cell of Z5 a point of R5 falls into
    pub fn r5_to_r5(&self, vec: &[f64; GRID_COUNT]) -> [i64; GRID_COUNT] {
        vec.map(|x| x.ceil() as i64)
    }

    /// `sum_k v_k * f_k`
    pub fn r5_to_complex(&self, vec: &[i64; GRID_COUNT]) -> Complex64 {
        vec.iter()
            .zip(self.params.rotation_factors.iter())
            .map(|(&v, &f)| f * v as f64)
            .sum()
    }

    /// Whether `z` lies on a line of pencil `j`. Always false for `j >= 5`.
    pub fn is_on_grid(&self, z: Complex64, j: usize) -> bool {
        if j >= GRID_COUNT {
            return false;
        }
        let x = self.complex_to_r5(z)[j];
        (x - x.round()).abs() <= GEOMETRY_EPSILON
    }

    /// The lines of pencil `j` with indices `index_min..=index_max`
    pub fn solution_space(&self, j: usize, index_min: i32, index_max: i32) -> Result<Lattice> {
        let factor = *self
            .params
            .rotation_factors
            .get(j)
            .ok_or(PentagridError::GridIndexOutOfRange(j))?;
        let magnitude = factor.norm();
        let line = Line2D::new(0.0, FRAC_PI_2 + factor.arg());
        Ok(Lattice::new(
            line,
            index_min,
            index_max,
            1.0 / magnitude,
            -self.params.gamma[j] / magnitude,
        ))
    }

    pub fn inflate(&mut self) {
        self.params = self.params.inflated();
        debug!("inflated, gamma = {:?}", self.params.gamma);
    }

    pub fn deflate(&mut self) {
        self.params = self.params.deflated();
        debug!("deflated, gamma = {:?}", self.params.gamma);
    }
}
