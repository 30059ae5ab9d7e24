//! Land-use breakdown of one representative housing block.

use serde::Serialize;

use crate::params::NeighbourhoodParams;

use super::geometry::BlockGeometry;

/// Areas of a single housing block by land use, in m².
///
/// Road covers the top and left edges of the block plus the laneway.
/// Sidewalk is assumed to surround the whole block, even across the laneway
/// entrance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BlockLandUseAreas {
    pub road_area_in_sq_m: f64,
    pub sidewalk_area_in_sq_m: f64,
    pub yard_area_in_sq_m: f64,
    pub built_land_area_in_sq_m: f64,
    /// Yard plus built land: the sum of all lot areas.
    pub private_land_area_in_sq_m: f64,
}

impl BlockLandUseAreas {
    /// Break down one block. `geometry` must come from the same `params`.
    pub fn for_block(params: &NeighbourhoodParams, geometry: &BlockGeometry) -> Self {
        let lots = geometry.lots_per_block as f64;
        let row_length = geometry.lot_row_length_in_m;
        let laneway_area = row_length * params.laneway_width_in_m;

        let private_land_area_in_sq_m = lots * params.lot_depth_in_m * params.lot_width_in_m;
        let built_land_area_in_sq_m = lots * geometry.building_footprint_in_sq_m();

        let road_area_in_sq_m = geometry.block_depth_in_m * params.road_width_in_m
            + (row_length + 2.0 * params.sidewalk_width_in_m) * params.road_width_in_m
            + laneway_area;

        // Everything inside the road edges, less lots and laneway pavement.
        let sidewalk_enclosed_area = (2.0 * params.sidewalk_width_in_m + row_length)
            * (2.0 * params.sidewalk_width_in_m
                + 2.0 * params.lot_depth_in_m
                + params.laneway_width_in_m);
        let sidewalk_area_in_sq_m =
            sidewalk_enclosed_area - private_land_area_in_sq_m - laneway_area;

        Self {
            road_area_in_sq_m,
            sidewalk_area_in_sq_m,
            yard_area_in_sq_m: private_land_area_in_sq_m - built_land_area_in_sq_m,
            built_land_area_in_sq_m,
            private_land_area_in_sq_m,
        }
    }

    /// Sum of every land use. Equals the block footprint for valid geometry.
    pub fn total_area_in_sq_m(&self) -> f64 {
        self.road_area_in_sq_m
            + self.sidewalk_area_in_sq_m
            + self.yard_area_in_sq_m
            + self.built_land_area_in_sq_m
    }
}
