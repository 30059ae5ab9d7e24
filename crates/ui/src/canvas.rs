//! Central canvas: plans the layout for the available area and renders it.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::palette::ROAD_COLOUR;
use rendering::{render, EguiSurface};
use simulation::params::NeighbourhoodParams;
use simulation::tiling::{plan_layout_with_scale, TilingConfig};
use simulation::NeighbourhoodError;

fn draw_neighbourhood(
    painter: egui::Painter,
    size: egui::Vec2,
    params: &NeighbourhoodParams,
    config: &TilingConfig,
) -> Result<(), NeighbourhoodError> {
    let plan = plan_layout_with_scale(
        params,
        size.x as f64,
        size.y as f64,
        config.draw_scale,
    )?;
    let mut surface = EguiSurface::new(painter);
    render(&mut surface, params, &plan)
}

/// Must run after the side panels so the central panel gets the remaining space.
pub fn canvas_ui(
    mut contexts: EguiContexts,
    params: Res<NeighbourhoodParams>,
    config: Res<TilingConfig>,
    mut last_error: Local<Option<String>>,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(egui::Color32::from(ROAD_COLOUR)))
        .show(contexts.ctx_mut(), |ui| {
            let size = ui.available_size();
            let (_response, painter) = ui.allocate_painter(size, egui::Sense::hover());

            match draw_neighbourhood(painter, size, &params, &config) {
                Ok(()) => *last_error = None,
                Err(err) => {
                    let message = err.to_string();
                    if last_error.as_deref() != Some(message.as_str()) {
                        warn!("Not drawing neighbourhood: {}", message);
                        *last_error = Some(message);
                    }
                }
            }
        });
}
