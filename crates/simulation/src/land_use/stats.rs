//! Neighbourhood-level aggregation and normalization to one square kilometre.

use serde::Serialize;

use crate::config::{AREA_TOLERANCE_SQ_M, SQ_M_PER_SQ_KM};
use crate::error::NeighbourhoodError;
use crate::params::NeighbourhoodParams;

use super::block::BlockLandUseAreas;
use super::geometry::BlockGeometry;

// =============================================================================
// Repeating group of blocks
// =============================================================================

/// Land-use areas of one repeating group of blocks, in m².
///
/// The group is `one_park_per_this_many_housing_blocks` blocks long. When
/// parks are enabled exactly one of them is a park block; every block in the
/// group, park or not, is bordered by sidewalk.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct NeighbourhoodAreas {
    pub blocks: u32,
    pub park_blocks: u32,
    pub road_area_in_sq_m: f64,
    pub sidewalk_area_in_sq_m: f64,
    pub yard_area_in_sq_m: f64,
    pub building_area_in_sq_m: f64,
    pub park_area_in_sq_m: f64,
}

impl NeighbourhoodAreas {
    pub fn aggregate(
        params: &NeighbourhoodParams,
        geometry: &BlockGeometry,
        block: &BlockLandUseAreas,
    ) -> Self {
        let blocks = params.one_park_per_this_many_housing_blocks;
        let park_blocks = u32::from(params.include_parks);
        let housing = f64::from(blocks - park_blocks);
        let parks = f64::from(park_blocks);

        // The laneway strip of a park block is part of the park itself.
        let park_width_in_m = geometry.lot_row_length_in_m;
        let park_depth_in_m = 2.0 * params.lot_depth_in_m + params.laneway_width_in_m;

        // A park block has no laneway, only its bounding road.
        let park_road_area = geometry.block_depth_in_m * params.road_width_in_m
            + (2.0 * params.sidewalk_width_in_m + geometry.lot_row_length_in_m)
                * params.road_width_in_m;

        Self {
            blocks,
            park_blocks,
            road_area_in_sq_m: block.road_area_in_sq_m * housing + park_road_area * parks,
            sidewalk_area_in_sq_m: block.sidewalk_area_in_sq_m * f64::from(blocks),
            yard_area_in_sq_m: block.yard_area_in_sq_m * housing,
            building_area_in_sq_m: block.built_land_area_in_sq_m * housing,
            park_area_in_sq_m: park_width_in_m * park_depth_in_m * parks,
        }
    }

    pub fn housing_blocks(&self) -> u32 {
        self.blocks - self.park_blocks
    }

    pub fn total_area_in_sq_m(&self) -> f64 {
        self.road_area_in_sq_m
            + self.yard_area_in_sq_m
            + self.building_area_in_sq_m
            + self.park_area_in_sq_m
            + self.sidewalk_area_in_sq_m
    }

    /// Check that the land uses add up to the group's footprint.
    ///
    /// A mismatch means the area formulas disagree with the block geometry.
    pub fn reconcile(&self, geometry: &BlockGeometry) -> Result<f64, NeighbourhoodError> {
        let expected_sq_m = f64::from(self.blocks) * geometry.block_area_in_sq_m();
        let calculated_sq_m = self.total_area_in_sq_m();
        if (expected_sq_m - calculated_sq_m).abs() > AREA_TOLERANCE_SQ_M {
            return Err(NeighbourhoodError::AreaMismatch {
                expected_sq_m,
                calculated_sq_m,
            });
        }
        Ok(calculated_sq_m)
    }
}

// =============================================================================
// Normalized statistics
// =============================================================================

/// Land-use statistics for a neighbourhood, normalized to 1 km².
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighbourhoodStatistics {
    pub yard_ratio: f64,
    pub road_ratio: f64,
    pub park_ratio: f64,
    pub sidewalk_ratio: f64,
    pub building_ratio: f64,
    pub floor_space_in_1_sq_km: f64,
    pub lots_in_1_sq_km: f64,
    pub dwelling_units_in_1_sq_km: f64,
    /// Floor space over total land, roads and parks included.
    pub gross_floor_space_ratio: f64,
    /// Floor space over private lot area only.
    pub net_floor_space_ratio: f64,
    /// Footprint of a single building (not scaled).
    pub building_footprint_area_in_sq_m: f64,
    pub max_adjacent_lots: usize,
    pub lots_per_block: usize,
    pub block: BlockLandUseAreas,
    pub areas: NeighbourhoodAreas,
}

impl NeighbourhoodStatistics {
    /// Sum of all land-use ratios. 1.0 up to rounding.
    pub fn ratio_sum(&self) -> f64 {
        self.yard_ratio + self.road_ratio + self.park_ratio + self.sidewalk_ratio + self.building_ratio
    }
}

/// Compute normalized land-use statistics for `params`.
///
/// Fails on invalid parameters, and on any area-reconciliation mismatch.
pub fn compute_statistics(
    params: &NeighbourhoodParams,
) -> Result<NeighbourhoodStatistics, NeighbourhoodError> {
    let geometry = BlockGeometry::from_params(params)?;
    let block = BlockLandUseAreas::for_block(params, &geometry);
    let areas = NeighbourhoodAreas::aggregate(params, &geometry, &block);
    let total = areas.reconcile(&geometry)?;

    let housing = f64::from(areas.housing_blocks());
    let floor_space = block.built_land_area_in_sq_m * housing * f64::from(params.storeys);
    let private_land = block.private_land_area_in_sq_m * housing;
    let scale = SQ_M_PER_SQ_KM / total;
    let floor_space_in_1_sq_km = scale * floor_space;

    Ok(NeighbourhoodStatistics {
        yard_ratio: areas.yard_area_in_sq_m / total,
        road_ratio: areas.road_area_in_sq_m / total,
        park_ratio: areas.park_area_in_sq_m / total,
        sidewalk_ratio: areas.sidewalk_area_in_sq_m / total,
        building_ratio: areas.building_area_in_sq_m / total,
        floor_space_in_1_sq_km,
        lots_in_1_sq_km: scale * geometry.lots_per_block as f64 * housing,
        dwelling_units_in_1_sq_km: floor_space_in_1_sq_km / params.average_unit_size_in_sq_m,
        gross_floor_space_ratio: floor_space / total,
        net_floor_space_ratio: if private_land > 0.0 {
            floor_space / private_land
        } else {
            0.0
        },
        building_footprint_area_in_sq_m: geometry.building_footprint_in_sq_m(),
        max_adjacent_lots: geometry.max_adjacent_lots,
        lots_per_block: geometry.lots_per_block,
        block,
        areas,
    })
}
