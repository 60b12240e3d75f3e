// src/render/tiling_renderer.rs
//
// One frame of the pentagrid scene: grid lines, intersections and the
// rhombus dual to every intersection, recomputed from scratch each call.

use log::trace;

use super::style::TilingStyle;
use crate::draw::{draw_lattice, DrawTarget};
use crate::errors::Result;
use crate::models::{Lattice, PentagridMap, TilingParameters, Vec2d, Viewport};
use crate::services::{LatticeIntersector, MathPentagrid};

/// What a frame contained, for the debug overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub visible_lines: usize,
    pub intersections: usize,
    pub rhombi: usize,
}

pub struct TilingRenderer {
    pub style: TilingStyle,
}

impl TilingRenderer {
    pub fn new(style: TilingStyle) -> Self {
        Self { style }
    }

    /// Render the tiling for `params` inside `viewport`.
    /// The parameters are not validated, drifted values render as they are.
    pub fn render<T: DrawTarget + ?Sized>(
        &self,
        params: &TilingParameters,
        viewport: &Viewport,
        target: &mut T,
    ) -> Result<RenderStats> {
        let pentagrid = MathPentagrid::new(PentagridMap::unvalidated(*params));
        let lattices = pentagrid.grid_lattices(viewport.line_min, viewport.line_max)?;

        let mut stats = RenderStats::default();
        if self.style.show_grid_lines {
            for (j, lattice) in lattices.iter().enumerate() {
                stats.visible_lines +=
                    draw_lattice(target, lattice, &viewport.bounds, self.style.grid_color(j));
            }
        }

        let (intersections, rhombi) = self.render_tiling(&lattices, &pentagrid, target)?;
        stats.intersections = intersections;
        stats.rhombi = rhombi;

        self.draw_origin(target);
        trace!("frame: {:?}", stats);
        Ok(stats)
    }

    /// Draw the rhombus of every crossing between the given pencils.
    /// Returns the number of crossings and of rhombi drawn.
    pub fn render_tiling<T: DrawTarget + ?Sized>(
        &self,
        lattices: &[Lattice],
        pentagrid: &MathPentagrid,
        target: &mut T,
    ) -> Result<(usize, usize)> {
        let intersections = LatticeIntersector::new(lattices).intersections();
        let style = &self.style;

        let mut rhombi = 0;
        for crossing in &intersections {
            let (r, s) = (crossing.r, crossing.s);
            if r + s == 0 {
                continue;
            }
            let vertices = pentagrid.rhombus_vertices(&crossing.point, r, s)?;

            if style.fill_rhombi {
                target.draw_polygon(&vertices, style.fill_color(r));
            }
            for i in 0..vertices.len() {
                let (a, b) = (vertices[i], vertices[(i + vertices.len() - 1) % vertices.len()]);
                target.draw_line(a, b, style.outer_stroke, style.colors[r]);
                target.draw_line(a, b, style.inner_stroke, style.colors[s]);
            }
            if style.show_dots {
                target.draw_dot(crossing.point, style.outer_dot, style.colors[r]);
                target.draw_dot(crossing.point, style.inner_dot, style.colors[s]);
            }
            rhombi += 1;
        }
        Ok((intersections.len(), rhombi))
    }

    fn draw_origin<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        target.draw_dot(
            Vec2d::zeros(),
            self.style.origin_radius,
            self.style.origin_color,
        );
    }
}
