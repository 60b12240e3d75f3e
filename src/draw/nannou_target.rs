// src/draw/nannou_target.rs
// Forwards primitives to a nannou `Draw`, mapping model space through a camera

use nannou::prelude::*;

use super::DrawTarget;
use crate::models::Vec2d;
use crate::views::Camera;

pub struct NannouTarget<'a> {
    draw: &'a Draw,
    camera: Camera,
}

impl<'a> NannouTarget<'a> {
    pub fn new(draw: &'a Draw, camera: Camera) -> Self {
        Self { draw, camera }
    }
}

impl DrawTarget for NannouTarget<'_> {
    fn draw_line(&mut self, from: Vec2d, to: Vec2d, width: f32, color: Rgba) {
        self.draw
            .line()
            .start(self.camera.to_screen(&from))
            .end(self.camera.to_screen(&to))
            .weight(width)
            .caps_round()
            .color(color);
    }

    fn draw_dot(&mut self, center: Vec2d, radius: f32, color: Rgba) {
        self.draw
            .ellipse()
            .xy(self.camera.to_screen(&center))
            .radius(radius)
            .color(color);
    }

    fn draw_polygon(&mut self, points: &[Vec2d], color: Rgba) {
        let camera = self.camera;
        self.draw
            .polygon()
            .color(color)
            .points(points.iter().map(|p| camera.to_screen(p)));
    }
}
