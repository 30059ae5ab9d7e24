//! A [`DrawSurface`] that records calls instead of painting pixels.
//!
//! Used by headless runs and tests: every call is logged in order, and each
//! rectangle is also stored in surface coordinates (after the transform in
//! effect when it was drawn), so callers can inspect where things landed.

use bevy::math::{DAffine2, DVec2};

use crate::palette::SurfaceColour;
use crate::surface::DrawSurface;

/// One call made against the surface, in local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCall {
    Clear,
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        colour: SurfaceColour,
    },
    StrokeRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        colour: SurfaceColour,
    },
    Translate {
        dx: f64,
        dy: f64,
    },
    Rotate {
        radians: f64,
    },
    Save,
    Restore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintKind {
    Fill,
    Stroke,
}

/// A rectangle as it lands on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintedRect {
    pub kind: PaintKind,
    pub colour: SurfaceColour,
    /// Corners in surface coordinates, in local order
    /// (x, y), (x + w, y), (x + w, y + h), (x, y + h).
    pub corners: [DVec2; 4],
}

impl PaintedRect {
    /// Axis-aligned bounding box as (min, max).
    pub fn bounds(&self) -> (DVec2, DVec2) {
        let mut min = self.corners[0];
        let mut max = self.corners[0];
        for corner in &self.corners[1..] {
            min = min.min(*corner);
            max = max.max(*corner);
        }
        (min, max)
    }
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    transform: DAffine2,
    stack: Vec<DAffine2>,
    calls: Vec<SurfaceCall>,
    painted: Vec<PaintedRect>,
    unmatched_restores: usize,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            transform: DAffine2::IDENTITY,
            stack: Vec::new(),
            calls: Vec::new(),
            painted: Vec::new(),
            unmatched_restores: 0,
        }
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn painted(&self) -> &[PaintedRect] {
        &self.painted
    }

    /// Saved states not yet restored.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// True when every save was restored and no restore came without a save.
    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty() && self.unmatched_restores == 0
    }

    pub fn transform(&self) -> DAffine2 {
        self.transform
    }

    /// Painted rectangles of one colour and kind.
    pub fn painted_with(
        &self,
        kind: PaintKind,
        colour: SurfaceColour,
    ) -> impl Iterator<Item = &PaintedRect> + '_ {
        self.painted
            .iter()
            .filter(move |rect| rect.kind == kind && rect.colour == colour)
    }

    fn paint(
        &mut self,
        kind: PaintKind,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        colour: SurfaceColour,
    ) {
        let corners = [
            DVec2::new(x, y),
            DVec2::new(x + width, y),
            DVec2::new(x + width, y + height),
            DVec2::new(x, y + height),
        ]
        .map(|corner| self.transform.transform_point2(corner));
        self.painted.push(PaintedRect {
            kind,
            colour,
            corners,
        });
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(SurfaceCall::Clear);
        self.painted.clear();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, colour: SurfaceColour) {
        self.calls.push(SurfaceCall::FillRect {
            x,
            y,
            width,
            height,
            colour,
        });
        self.paint(PaintKind::Fill, x, y, width, height, colour);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64, colour: SurfaceColour) {
        self.calls.push(SurfaceCall::StrokeRect {
            x,
            y,
            width,
            height,
            colour,
        });
        self.paint(PaintKind::Stroke, x, y, width, height, colour);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.calls.push(SurfaceCall::Translate { dx, dy });
        self.transform = self.transform * DAffine2::from_translation(DVec2::new(dx, dy));
    }

    fn rotate(&mut self, radians: f64) {
        self.calls.push(SurfaceCall::Rotate { radians });
        self.transform = self.transform * DAffine2::from_angle(radians);
    }

    fn save(&mut self) {
        self.calls.push(SurfaceCall::Save);
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        self.calls.push(SurfaceCall::Restore);
        match self.stack.pop() {
            Some(transform) => self.transform = transform,
            None => self.unmatched_restores += 1,
        }
    }
}
