// src/models/parameters.rs
//
// The value that fully describes one pentagrid: the gamma offsets of the five
// pencils and their rotation factors. The driver owns the current value and
// replaces it every frame; nothing mutates a shared instance.

use nalgebra::{Matrix5, RowVector5};
use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::PI;

use crate::errors::{PentagridError, Result};

/// Number of pencils in a pentagrid
pub const GRID_COUNT: usize = 5;

/// Allowed magnitude of the rotation factor sums
pub const ROTATION_SUM_TOLERANCE: f64 = 1e-10;

/// Golden ratio
pub const PHI: f64 = 1.618_033_988_749_895;

/// Offsets of the reference Penrose tiling
pub const DEFAULT_GAMMA: [f64; GRID_COUNT] = [0.0, 0.1, 0.2, 0.3, -0.6];

/// Inflation matrix: golden ratio times the adjacency of the 5-cycle
pub fn inflation_matrix() -> Matrix5<f64> {
    #[rustfmt::skip]
    let adjacency = Matrix5::new(
        0.0, 1.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 1.0, 0.0,
    );
    adjacency * PHI
}

/// Precomputed inverse of [`inflation_matrix`]
pub fn deflation_matrix() -> Matrix5<f64> {
    #[rustfmt::skip]
    let signs = Matrix5::new(
         1.0,  1.0, -1.0, -1.0,  1.0,
         1.0,  1.0,  1.0, -1.0, -1.0,
        -1.0,  1.0,  1.0,  1.0, -1.0,
        -1.0, -1.0,  1.0,  1.0,  1.0,
         1.0, -1.0, -1.0,  1.0,  1.0,
    );
    signs * (0.5 / PHI)
}

/// Right-multiply a row of reals by `matrix`
fn mul_real_row(row: &[f64; GRID_COUNT], matrix: &Matrix5<f64>) -> [f64; GRID_COUNT] {
    let product = RowVector5::from_row_slice(&row[..]) * matrix;
    let mut out = [0.0; GRID_COUNT];
    out.iter_mut().zip(product.iter()).for_each(|(o, v)| *o = *v);
    out
}

/// Right-multiply a row of complex numbers by a real `matrix`
fn mul_complex_row(row: &[Complex64; GRID_COUNT], matrix: &Matrix5<f64>) -> [Complex64; GRID_COUNT] {
    let re = mul_real_row(&row.map(|c| c.re), matrix);
    let im = mul_real_row(&row.map(|c| c.im), matrix);
    std::array::from_fn(|k| Complex64::new(re[k], im[k]))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilingParameters {
    /// Offset of each pencil; sums to ~0 for an edge-to-edge tiling
    pub gamma: [f64; GRID_COUNT],
    /// Orientation (and inverse spacing) of each pencil
    pub rotation_factors: [Complex64; GRID_COUNT],
}

impl Default for TilingParameters {
    fn default() -> Self {
        Self::penrose(DEFAULT_GAMMA)
    }
}

impl TilingParameters {
    pub fn new(gamma: [f64; GRID_COUNT], rotation_factors: [Complex64; GRID_COUNT]) -> Self {
        Self {
            gamma,
            rotation_factors,
        }
    }

    /// Fifth roots of unity as rotation factors
    pub fn penrose(gamma: [f64; GRID_COUNT]) -> Self {
        Self::new(gamma, Self::perturbed_roots(1.0))
    }

    /// `zeta^k` with `zeta = exp(param * 2 pi i / 5)`.
    /// `param == 1.0` yields the fifth roots of unity.
    pub fn perturbed_roots(param: f64) -> [Complex64; GRID_COUNT] {
        let zeta = Complex64::from_polar(1.0, param * 2.0 * PI / GRID_COUNT as f64);
        std::array::from_fn(|k| zeta.powu(k as u32))
    }

    /// Factors used by the plane-to-R5 map
    pub fn forward_factors(&self) -> [Complex64; GRID_COUNT] {
        self.rotation_factors.map(|f| f.conj())
    }

    pub fn gamma_sum(&self) -> f64 {
        self.gamma.iter().sum()
    }

    /// Both rotation factor sums must vanish for the tiling to be edge-to-edge
    pub fn validate(&self) -> Result<()> {
        let sums = [
            ("forward", self.forward_factors().iter().sum::<Complex64>()),
            ("inverse", self.rotation_factors.iter().sum::<Complex64>()),
        ];
        for (which, sum) in sums {
            if sum.norm() > ROTATION_SUM_TOLERANCE {
                return Err(PentagridError::InvalidRotationFactors {
                    which,
                    magnitude: sum.norm(),
                    tolerance: ROTATION_SUM_TOLERANCE,
                });
            }
        }
        Ok(())
    }

    pub fn with_gamma(&self, gamma: [f64; GRID_COUNT]) -> Self {
        Self { gamma, ..*self }
    }

    /// Add `delta` to gamma component-wise. The sum is not re-normalized.
    pub fn with_gamma_delta(&self, delta: [f64; GRID_COUNT]) -> Self {
        let gamma = std::array::from_fn(|k| self.gamma[k] + delta[k]);
        self.with_gamma(gamma)
    }

    /// Rotate each factor by its own angle (radians). Breaks the factor sums
    /// unless all angles are equal.
    pub fn with_rotation_delta(&self, angles: [f64; GRID_COUNT]) -> Self {
        let rotation_factors =
            std::array::from_fn(|k| self.rotation_factors[k] * Complex64::from_polar(1.0, angles[k]));
        Self {
            rotation_factors,
            ..*self
        }
    }

    /// Four offsets drawn from `[-0.5, 0.5)`, the fifth balances the sum to zero
    pub fn with_random_gamma<R: Rng>(&self, rng: &mut R) -> Self {
        let mut gamma = [0.0; GRID_COUNT];
        for g in gamma.iter_mut().take(GRID_COUNT - 1) {
            *g = rng.gen_range(-0.5..0.5);
        }
        gamma[GRID_COUNT - 1] = -gamma[..GRID_COUNT - 1].iter().sum::<f64>();
        self.with_gamma(gamma)
    }

    /// Substitute into the self-similar tiling one level up
    pub fn inflated(&self) -> Self {
        self.transformed(&inflation_matrix())
    }

    /// Inverse of [`inflated`](Self::inflated)
    pub fn deflated(&self) -> Self {
        self.transformed(&deflation_matrix())
    }

    fn transformed(&self, matrix: &Matrix5<f64>) -> Self {
        Self {
            gamma: mul_real_row(&self.gamma, matrix),
            rotation_factors: mul_complex_row(&self.rotation_factors, matrix),
        }
    }
}
