pub mod fibonacci_service;
pub mod lattice_intersector;
pub mod math_pentagrid;

pub use fibonacci_service::{FibonacciStrip, StepAxis, StripSegment};
pub use lattice_intersector::{intersect_lattices, LatticeIntersection, LatticeIntersector};
pub use math_pentagrid::MathPentagrid;
