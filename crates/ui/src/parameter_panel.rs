//! Parameter form: one control per field of the parameter record.
//!
//! Edits go to a local copy and are written back with `set_if_neq`, so the
//! recompute system only sees a change when a value actually moved.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::config::{
    MAX_BLOCK_LENGTH_RANGE_M, PARK_PERIOD_RANGE, STOREYS_RANGE, STREET_WIDTH_RANGE_M,
};
use simulation::params::NeighbourhoodParams;

fn percent_slider(ui: &mut egui::Ui, value: &mut f64, label: &str) {
    ui.add(
        egui::Slider::new(value, 0.0..=100.0)
            .text(label)
            .suffix(" %"),
    );
}

fn street_slider(ui: &mut egui::Ui, value: &mut f64, label: &str) {
    ui.add(
        egui::Slider::new(value, STREET_WIDTH_RANGE_M.0..=STREET_WIDTH_RANGE_M.1)
            .text(label)
            .suffix(" m"),
    );
}

fn metres_field(ui: &mut egui::Ui, value: &mut f64, label: &str) {
    ui.horizontal(|ui| {
        ui.add(
            egui::DragValue::new(value)
                .range(0.1..=1000.0)
                .speed(0.1)
                .suffix(" m"),
        );
        ui.label(label);
    });
}

pub fn parameter_panel_ui(mut contexts: EguiContexts, mut params: ResMut<NeighbourhoodParams>) {
    let mut edited = params.clone();

    egui::SidePanel::left("parameter_panel")
        .default_width(260.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Lots");
            metres_field(ui, &mut edited.lot_width_in_m, "Lot width");
            metres_field(ui, &mut edited.lot_depth_in_m, "Lot depth");
            percent_slider(ui, &mut edited.front_yard_percent, "Front yard");
            percent_slider(ui, &mut edited.side_yard_percent, "Side yard");
            percent_slider(ui, &mut edited.back_yard_percent, "Back yard");
            ui.add(
                egui::Slider::new(&mut edited.storeys, STOREYS_RANGE.0..=STOREYS_RANGE.1)
                    .text("Storeys"),
            );
            ui.horizontal(|ui| {
                ui.add(
                    egui::DragValue::new(&mut edited.average_unit_size_in_sq_m)
                        .range(1.0..=1000.0)
                        .suffix(" m²"),
                );
                ui.label("Average unit size");
            });

            ui.separator();
            ui.heading("Streets");
            street_slider(ui, &mut edited.road_width_in_m, "Road width");
            street_slider(ui, &mut edited.sidewalk_width_in_m, "Sidewalk width");
            street_slider(ui, &mut edited.laneway_width_in_m, "Laneway width");
            ui.add(
                egui::Slider::new(
                    &mut edited.max_block_length_in_m,
                    MAX_BLOCK_LENGTH_RANGE_M.0..=MAX_BLOCK_LENGTH_RANGE_M.1,
                )
                .text("Max block length")
                .suffix(" m"),
            );

            ui.separator();
            ui.heading("Parks");
            ui.checkbox(&mut edited.include_parks, "Include parks");
            ui.add_enabled(
                edited.include_parks,
                egui::Slider::new(
                    &mut edited.one_park_per_this_many_housing_blocks,
                    PARK_PERIOD_RANGE.0..=PARK_PERIOD_RANGE.1,
                )
                .text("One park per N blocks"),
            );

            ui.separator();
            if ui.button("Reset to defaults").clicked() {
                edited = NeighbourhoodParams::default();
            }
        });

    params.set_if_neq(edited);
}
