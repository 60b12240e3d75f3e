// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

use crate::models::parameters::{DEFAULT_GAMMA, GRID_COUNT};

#[derive(Debug, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    pub scale: f64,    // pixels per model unit
    pub overscan: f64, // how far lines run past the window edge (1.0 = exactly to the edge)
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TilingConfig {
    pub gamma: [f64; GRID_COUNT],
    pub line_min: i32,
    pub line_max: i32,
    /// Longest `line_min..=line_max` range the controls may request
    pub max_lines_per_pencil: u32,
}

/// Speeds of the held-key controls, per second
#[derive(Debug, Deserialize, Clone)]
pub struct ControlsConfig {
    pub gamma_speed: f64,
    pub rotation_speed: f64, // radians
    pub pan_speed: f64,      // model units
    pub zoom_speed: f64,     // scale factor per second is 1 + zoom_speed
    pub line_angle_speed: f64,
    pub line_offset_speed: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StyleConfig {
    pub colors: [[f32; 3]; GRID_COUNT],
    pub background: [f32; 3],
    pub grid_alpha: f32,
    pub outer_stroke: f32,
    pub inner_stroke: f32,
    pub outer_dot: f32,
    pub inner_dot: f32,
    pub fill_alpha: f32,
    pub show_grid_lines: bool,
    pub show_dots: bool,
    pub fill_rhombi: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FibonacciConfig {
    pub angle: f64,
    pub offset: f64,
    pub half_extent: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OscConfig {
    pub enabled: bool,
    pub rx_port: u16,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            title: "pentavis".to_string(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scale: 60.0,
            overscan: 1.2,
        }
    }
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            line_min: -12,
            line_max: 12,
            max_lines_per_pencil: 201,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            gamma_speed: 0.2,
            rotation_speed: 0.1,
            pan_speed: 4.0,
            zoom_speed: 1.0,
            line_angle_speed: 0.2,
            line_offset_speed: 0.5,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            colors: [
                [0.90, 0.30, 0.25],
                [0.95, 0.75, 0.20],
                [0.35, 0.80, 0.40],
                [0.25, 0.55, 0.95],
                [0.70, 0.40, 0.90],
            ],
            background: [0.05, 0.05, 0.07],
            grid_alpha: 0.25,
            outer_stroke: 5.0,
            inner_stroke: 2.0,
            outer_dot: 4.0,
            inner_dot: 2.0,
            fill_alpha: 0.35,
            show_grid_lines: true,
            show_dots: true,
            fill_rhombi: false,
        }
    }
}

impl Default for FibonacciConfig {
    fn default() -> Self {
        Self {
            angle: 0.5535743588970452, // atan(1 / golden ratio)
            offset: 0.3,
            half_extent: 5.0,
        }
    }
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rx_port: 9000,
        }
    }
}
