//! Lot and block geometry derived from a parameter record.

use serde::Serialize;

use crate::error::NeighbourhoodError;
use crate::params::NeighbourhoodParams;

/// Depth of the building on a lot after front and back setbacks.
///
/// Never negative: setbacks adding up to 100% or more leave no buildable depth.
pub fn building_depth(lot_depth: f64, front_yard_percent: f64, back_yard_percent: f64) -> f64 {
    (lot_depth * (100.0 - front_yard_percent - back_yard_percent) / 100.0).max(0.0)
}

/// Width of the building on a lot after a side setback on both sides.
///
/// Never negative: a side setback of 50% or more leaves no buildable width.
pub fn building_width(lot_width: f64, side_yard_percent: f64) -> f64 {
    (lot_width * (100.0 - 2.0 * side_yard_percent) / 100.0).max(0.0)
}

/// How many lots fit side by side without exceeding the block length cap.
/// One more lot would break the cap, so the result is floored.
pub fn max_adjacent_lots(max_block_length_in_m: f64, lot_width_in_m: f64) -> usize {
    (max_block_length_in_m / lot_width_in_m).floor() as usize
}

/// Derived dimensions of one representative block.
///
/// A block is tiled with road on its top and left edges, sidewalk all the
/// way around, and two rows of lots back to back across a central laneway.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockGeometry {
    pub max_adjacent_lots: usize,
    /// One row of lots on each side of the laneway.
    pub lots_per_block: usize,
    /// Length of one row of lots.
    pub lot_row_length_in_m: f64,
    /// Road + lot row + sidewalk on both ends.
    pub block_width_in_m: f64,
    /// Road + two lot depths + laneway + sidewalk on both sides.
    pub block_depth_in_m: f64,
    pub building_depth_in_m: f64,
    pub building_width_in_m: f64,
}

impl BlockGeometry {
    /// Validate `params` and derive the block dimensions from it.
    pub fn from_params(params: &NeighbourhoodParams) -> Result<Self, NeighbourhoodError> {
        params.validate()?;

        let max_adjacent_lots =
            max_adjacent_lots(params.max_block_length_in_m, params.lot_width_in_m);
        if max_adjacent_lots == 0 {
            return Err(NeighbourhoodError::invalid(
                "max_block_length_in_m",
                "does not fit a single lot",
            ));
        }
        let lots_per_block = max_adjacent_lots.checked_mul(2).ok_or_else(|| {
            NeighbourhoodError::invalid("max_block_length_in_m", "too many lots per block")
        })?;
        let lot_row_length_in_m = max_adjacent_lots as f64 * params.lot_width_in_m;

        Ok(Self {
            max_adjacent_lots,
            lots_per_block,
            lot_row_length_in_m,
            block_width_in_m: params.road_width_in_m
                + lot_row_length_in_m
                + 2.0 * params.sidewalk_width_in_m,
            block_depth_in_m: params.road_width_in_m
                + 2.0 * params.lot_depth_in_m
                + params.laneway_width_in_m
                + 2.0 * params.sidewalk_width_in_m,
            building_depth_in_m: building_depth(
                params.lot_depth_in_m,
                params.front_yard_percent,
                params.back_yard_percent,
            ),
            building_width_in_m: building_width(params.lot_width_in_m, params.side_yard_percent),
        })
    }

    /// Land covered by a single building.
    pub fn building_footprint_in_sq_m(&self) -> f64 {
        self.building_depth_in_m * self.building_width_in_m
    }

    /// Full block footprint including its share of road.
    pub fn block_area_in_sq_m(&self) -> f64 {
        self.block_width_in_m * self.block_depth_in_m
    }
}
