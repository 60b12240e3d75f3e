// src/utilities/mod.rs

pub mod rounding;

pub use crate::models::geometry::project_point_line;
pub use rounding::{closest_half_point, closest_integral_point, merge_sorted_by, round_half};
