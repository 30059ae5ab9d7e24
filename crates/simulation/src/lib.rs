use bevy::prelude::*;

pub mod config;
pub mod error;
pub mod land_use;
pub mod params;
pub mod recompute;
pub mod tiling;

pub use error::NeighbourhoodError;
pub use land_use::{compute_statistics, NeighbourhoodStatistics};
pub use params::NeighbourhoodParams;
pub use recompute::{recompute, NeighbourhoodState};
pub use tiling::{plan_layout, TiledLayoutPlan, TilingConfig};

/// Registers the parameter record, tiling settings, and the recompute system.
///
/// Resources already inserted before the plugin (e.g. parameters parsed from
/// a query string) are kept.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NeighbourhoodParams>()
            .init_resource::<TilingConfig>()
            .init_resource::<NeighbourhoodState>()
            .add_systems(Update, recompute::recompute_on_param_change);
    }
}
