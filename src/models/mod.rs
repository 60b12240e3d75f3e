pub mod geometry;
pub mod lattice;
pub mod line;
pub mod parameters;
pub mod pentagrid_map;
pub mod viewport;

pub use geometry::{Bounds, Vec2d};
pub use lattice::Lattice;
pub use line::Line2D;
pub use parameters::{TilingParameters, GRID_COUNT, PHI};
pub use pentagrid_map::PentagridMap;
pub use viewport::Viewport;
