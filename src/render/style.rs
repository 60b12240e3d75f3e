// src/render/style.rs
// Colours and stroke sizes of a tiling frame

use nannou::color::{rgba, Rgba};

use crate::config::StyleConfig;
use crate::models::GRID_COUNT;

#[derive(Debug, Clone)]
pub struct TilingStyle {
    /// One colour per pencil; a rhombus takes the colours of its two pencils
    pub colors: [Rgba; GRID_COUNT],
    pub background: Rgba,
    pub grid_alpha: f32,
    pub outer_stroke: f32,
    pub inner_stroke: f32,
    pub outer_dot: f32,
    pub inner_dot: f32,
    pub fill_alpha: f32,
    pub origin_color: Rgba,
    pub origin_radius: f32,
    pub show_grid_lines: bool,
    pub show_dots: bool,
    pub fill_rhombi: bool,
}

impl Default for TilingStyle {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}

impl TilingStyle {
    pub fn from_config(config: &StyleConfig) -> Self {
        let [r, g, b] = config.background;
        Self {
            colors: config.colors.map(|[r, g, b]| rgba(r, g, b, 1.0)),
            background: rgba(r, g, b, 1.0),
            grid_alpha: config.grid_alpha,
            outer_stroke: config.outer_stroke,
            inner_stroke: config.inner_stroke,
            outer_dot: config.outer_dot,
            inner_dot: config.inner_dot,
            fill_alpha: config.fill_alpha,
            origin_color: rgba(1.0, 1.0, 1.0, 1.0),
            origin_radius: 5.0,
            show_grid_lines: config.show_grid_lines,
            show_dots: config.show_dots,
            fill_rhombi: config.fill_rhombi,
        }
    }

    /// Colour of pencil `j` with its alpha replaced
    pub fn color_with_alpha(&self, j: usize, alpha: f32) -> Rgba {
        let color = self.colors[j % GRID_COUNT];
        rgba(color.red, color.green, color.blue, alpha)
    }

    pub fn grid_color(&self, j: usize) -> Rgba {
        self.color_with_alpha(j, self.grid_alpha)
    }

    pub fn fill_color(&self, j: usize) -> Rgba {
        self.color_with_alpha(j, self.fill_alpha)
    }
}
