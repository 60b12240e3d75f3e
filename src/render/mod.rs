// src/render/mod.rs
// Scene renderers emitting primitives to a DrawTarget

pub mod fibonacci_renderer;
pub mod style;
pub mod tiling_renderer;

pub use fibonacci_renderer::{FibonacciRenderer, FibonacciStyle};
pub use style::TilingStyle;
pub use tiling_renderer::{RenderStats, TilingRenderer};
