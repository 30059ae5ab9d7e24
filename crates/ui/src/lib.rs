use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod canvas;
pub mod parameter_panel;
pub mod stats_panel;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin).add_systems(
            Update,
            (
                parameter_panel::parameter_panel_ui,
                stats_panel::stats_panel_ui,
                canvas::canvas_ui,
            )
                .chain(),
        );
    }
}
