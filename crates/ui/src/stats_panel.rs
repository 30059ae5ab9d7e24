//! Statistics readout and colour legend.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::palette::{
    SurfaceColour, BUILDING_COLOUR, PARK_COLOUR, ROAD_COLOUR, SIDEWALK_COLOUR, YARD_COLOUR,
};
use simulation::land_use::NeighbourhoodStatistics;
use simulation::NeighbourhoodState;

const ERROR_COLOUR: egui::Color32 = egui::Color32::from_rgb(220, 60, 60);

fn ratio_row(ui: &mut egui::Ui, colour: SurfaceColour, label: &str, ratio: f64) {
    ui.colored_label(egui::Color32::from(colour), "■");
    ui.label(label);
    ui.label(format!("{:.1}%", ratio * 100.0));
    ui.end_row();
}

fn value_row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.label(label);
    ui.label(value);
    ui.end_row();
}

fn land_use_grid(ui: &mut egui::Ui, stats: &NeighbourhoodStatistics) {
    egui::Grid::new("land_use_ratios")
        .num_columns(3)
        .show(ui, |ui| {
            ratio_row(ui, BUILDING_COLOUR, "Buildings", stats.building_ratio);
            ratio_row(ui, YARD_COLOUR, "Yards", stats.yard_ratio);
            ratio_row(ui, ROAD_COLOUR, "Roads", stats.road_ratio);
            ratio_row(ui, SIDEWALK_COLOUR, "Sidewalks", stats.sidewalk_ratio);
            ratio_row(ui, PARK_COLOUR, "Parks", stats.park_ratio);
        });
}

fn density_grid(ui: &mut egui::Ui, stats: &NeighbourhoodStatistics) {
    egui::Grid::new("density_per_sq_km")
        .num_columns(2)
        .show(ui, |ui| {
            value_row(ui, "Lots:", format!("{:.0}", stats.lots_in_1_sq_km));
            value_row(
                ui,
                "Floor space:",
                format!("{:.0} m²", stats.floor_space_in_1_sq_km),
            );
            value_row(
                ui,
                "Dwelling units:",
                format!("{:.0}", stats.dwelling_units_in_1_sq_km),
            );
            value_row(
                ui,
                "Gross FSR:",
                format!("{:.2}", stats.gross_floor_space_ratio),
            );
            value_row(ui, "Net FSR:", format!("{:.2}", stats.net_floor_space_ratio));
        });
}

fn block_grid(ui: &mut egui::Ui, stats: &NeighbourhoodStatistics) {
    egui::Grid::new("block_summary")
        .num_columns(2)
        .show(ui, |ui| {
            value_row(ui, "Lots per row:", stats.max_adjacent_lots.to_string());
            value_row(ui, "Lots per block:", stats.lots_per_block.to_string());
            value_row(
                ui,
                "Building footprint:",
                format!("{:.1} m²", stats.building_footprint_area_in_sq_m),
            );
            value_row(
                ui,
                "Private land per block:",
                format!("{:.0} m²", stats.block.private_land_area_in_sq_m),
            );
        });
}

pub fn stats_panel_ui(mut contexts: EguiContexts, state: Res<NeighbourhoodState>) {
    egui::SidePanel::right("stats_panel")
        .default_width(240.0)
        .show(contexts.ctx_mut(), |ui| {
            if let Some(err) = &state.error {
                ui.heading("Invalid layout");
                ui.colored_label(ERROR_COLOUR, err.to_string());
                return;
            }
            let Some(stats) = &state.statistics else {
                ui.label("Computing...");
                return;
            };

            ui.heading("Land use");
            land_use_grid(ui, stats);

            ui.separator();
            ui.heading("Per km²");
            density_grid(ui, stats);

            ui.separator();
            ui.heading("Block");
            block_grid(ui, stats);
        });
}
