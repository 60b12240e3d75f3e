// src/draw/recorder.rs
// Headless target that keeps every primitive it is given

use nannou::color::Rgba;

use super::DrawTarget;
use crate::models::Vec2d;

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        from: Vec2d,
        to: Vec2d,
        width: f32,
        color: Rgba,
    },
    Dot {
        center: Vec2d,
        radius: f32,
        color: Rgba,
    },
    Polygon {
        points: Vec<Vec2d>,
        color: Rgba,
    },
}

#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub primitives: Vec<Primitive>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Vec2d, &Vec2d, f32)> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Line {
                from, to, width, ..
            } => Some((from, to, *width)),
            _ => None,
        })
    }

    pub fn dots(&self) -> impl Iterator<Item = (&Vec2d, f32)> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Dot { center, radius, .. } => Some((center, *radius)),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = &[Vec2d]> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Polygon { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }
}

impl DrawTarget for RecordingTarget {
    fn draw_line(&mut self, from: Vec2d, to: Vec2d, width: f32, color: Rgba) {
        self.primitives.push(Primitive::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn draw_dot(&mut self, center: Vec2d, radius: f32, color: Rgba) {
        self.primitives.push(Primitive::Dot {
            center,
            radius,
            color,
        });
    }

    fn draw_polygon(&mut self, points: &[Vec2d], color: Rgba) {
        self.primitives.push(Primitive::Polygon {
            points: points.to_vec(),
            color,
        });
    }
}
