// src/views/mod.rs

pub mod camera;

pub use camera::Camera;
