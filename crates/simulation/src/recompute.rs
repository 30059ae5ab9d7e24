//! Pull-based recomputation of neighbourhood statistics.
//!
//! [`recompute`] is the single entry point: callers invoke it whenever they
//! decide a new parameter snapshot is ready. Inside the app that decision is
//! bevy change detection on the [`NeighbourhoodParams`] resource, so the
//! statistics are rebuilt exactly once per edit and never incrementally.

use bevy::prelude::*;

use crate::error::NeighbourhoodError;
use crate::land_use::{compute_statistics, NeighbourhoodStatistics};
use crate::params::NeighbourhoodParams;

/// Recompute statistics for one parameter snapshot. Stateless and reentrant.
pub fn recompute(
    params: &NeighbourhoodParams,
) -> Result<NeighbourhoodStatistics, NeighbourhoodError> {
    let stats = compute_statistics(params)?;
    debug!(
        "Recomputed neighbourhood: {:.1} lots/km², road {:.3}, yard {:.3}, building {:.3}, park {:.3}, sidewalk {:.3}",
        stats.lots_in_1_sq_km,
        stats.road_ratio,
        stats.yard_ratio,
        stats.building_ratio,
        stats.park_ratio,
        stats.sidewalk_ratio
    );
    Ok(stats)
}

/// Latest outcome of [`recompute`] for the current parameter resource.
///
/// Exactly one of `statistics` and `error` is set after the first run.
#[derive(Resource, Debug, Default)]
pub struct NeighbourhoodState {
    pub statistics: Option<NeighbourhoodStatistics>,
    pub error: Option<NeighbourhoodError>,
    /// Incremented on every recompute.
    pub revision: u64,
}

impl NeighbourhoodState {
    pub fn apply(&mut self, result: Result<NeighbourhoodStatistics, NeighbourhoodError>) {
        match result {
            Ok(stats) => {
                self.statistics = Some(stats);
                self.error = None;
            }
            Err(err) => {
                self.statistics = None;
                self.error = Some(err);
            }
        }
        self.revision += 1;
    }
}

/// Re-run [`recompute`] when the parameter resource has changed.
pub fn recompute_on_param_change(
    params: Res<NeighbourhoodParams>,
    mut state: ResMut<NeighbourhoodState>,
) {
    if !params.is_changed() {
        return;
    }

    let result = recompute(&params);
    if let Err(err) = &result {
        error!("Neighbourhood recompute failed: {}", err);
    }
    state.apply(result);
}
