// src/lib.rs
//
// Penrose tilings from de Bruijn pentagrids: five pencils of parallel lines,
// their crossings, and the rhombus dual to every crossing.

pub mod config;
pub mod controllers;
pub mod draw;
pub mod errors;
pub mod models;
pub mod render;
pub mod services;
pub mod utilities;
pub mod views;

pub use errors::{PentagridError, Result};
