//! [`DrawSurface`] backed by an egui painter.

use bevy::math::{DAffine2, DVec2};
use bevy_egui::egui;

use crate::palette::SurfaceColour;
use crate::surface::DrawSurface;

const STROKE_WIDTH: f32 = 1.0;

impl From<SurfaceColour> for egui::Color32 {
    fn from(colour: SurfaceColour) -> Self {
        egui::Color32::from_rgb(colour.r, colour.g, colour.b)
    }
}

/// Paints into an egui painter's clip rectangle.
///
/// Surface coordinate (0, 0) is the top-left corner of the painter's clip
/// rect. Rotated rectangles are emitted as convex polygons.
pub struct EguiSurface {
    painter: egui::Painter,
    origin: DVec2,
    transform: DAffine2,
    stack: Vec<DAffine2>,
}

impl EguiSurface {
    pub fn new(painter: egui::Painter) -> Self {
        let min = painter.clip_rect().min;
        Self {
            painter,
            origin: DVec2::new(min.x as f64, min.y as f64),
            transform: DAffine2::IDENTITY,
            stack: Vec::new(),
        }
    }

    fn corners(&self, x: f64, y: f64, width: f64, height: f64) -> Vec<egui::Pos2> {
        [
            DVec2::new(x, y),
            DVec2::new(x + width, y),
            DVec2::new(x + width, y + height),
            DVec2::new(x, y + height),
        ]
        .into_iter()
        .map(|corner| {
            let p = self.origin + self.transform.transform_point2(corner);
            egui::pos2(p.x as f32, p.y as f32)
        })
        .collect()
    }
}

impl DrawSurface for EguiSurface {
    /// egui redraws every frame from an empty list, so there is nothing to wipe.
    fn clear(&mut self) {}

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, colour: SurfaceColour) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let points = self.corners(x, y, width, height);
        self.painter.add(egui::Shape::convex_polygon(
            points,
            egui::Color32::from(colour),
            egui::Stroke::NONE,
        ));
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64, colour: SurfaceColour) {
        let points = self.corners(x, y, width, height);
        self.painter.add(egui::Shape::closed_line(
            points,
            egui::Stroke::new(STROKE_WIDTH, egui::Color32::from(colour)),
        ));
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform * DAffine2::from_translation(DVec2::new(dx, dy));
    }

    fn rotate(&mut self, radians: f64) {
        self.transform = self.transform * DAffine2::from_angle(radians);
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
    }
}
