// src/utilities/rounding.rs
//
// Snapping points to the square lattice and merging sorted crossing lists

use std::cmp::Ordering;

use crate::models::Vec2d;

/// Nearest value of the form `n + 0.5`
pub fn round_half(x: f64) -> f64 {
    (x - 0.5).round() + 0.5
}

/// Centre of the unit cell of the integer grid that contains `point`
pub fn closest_half_point(point: &Vec2d) -> Vec2d {
    point.map(round_half)
}

pub fn closest_integral_point(point: &Vec2d) -> Vec2d {
    point.map(f64::round)
}

/// Merge two ascending slices into one ascending list. Where the heads of
/// both compare `Equal` only the element from `a` is kept.
pub fn merge_sorted_by<T, F>(a: &[T], b: &[T], mut cmp: F) -> Vec<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match cmp(&a[i], &b[j]) {
            Ordering::Less => {
                merged.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                merged.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                merged.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}
