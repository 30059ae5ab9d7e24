//! Neighbourhood parameter record.
//!
//! `NeighbourhoodParams` is the single input to both the land-use model and
//! the tiling layout. It is treated as an immutable snapshot: every derived
//! value is recomputed from scratch whenever the resource changes.
//!
//! The record is normally produced by an input layer (the parameter panel, or
//! a query string via [`NeighbourhoodParams::from_query`]). The core still
//! calls [`NeighbourhoodParams::validate`] before deriving any geometry, so a
//! bad record fails cleanly instead of yielding zero or negative lot counts.

mod query;
mod tests;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::MAX_LOTS_PER_ROW;
use crate::error::NeighbourhoodError;

pub use query::QUERY_KEYS;

/// Zoning parameters describing one residential neighbourhood.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeighbourhoodParams {
    /// Share of lot depth kept clear at the front (street side), 0-100.
    pub front_yard_percent: f64,
    /// Share of lot width kept clear on each side, 0-100.
    pub side_yard_percent: f64,
    /// Share of lot depth kept clear at the back (laneway side), 0-100.
    pub back_yard_percent: f64,
    pub lot_depth_in_m: f64,
    pub lot_width_in_m: f64,
    pub storeys: u32,
    pub road_width_in_m: f64,
    pub laneway_width_in_m: f64,
    pub sidewalk_width_in_m: f64,
    /// If one more lot would push a block past this length, it is not built.
    pub max_block_length_in_m: f64,
    pub include_parks: bool,
    /// Period of the park pattern: one block in this many is a park.
    pub one_park_per_this_many_housing_blocks: u32,
    /// Used only to estimate dwelling units from floor space.
    pub average_unit_size_in_sq_m: f64,
}

impl Default for NeighbourhoodParams {
    fn default() -> Self {
        Self {
            front_yard_percent: 20.0,
            side_yard_percent: 10.0,
            back_yard_percent: 45.0,
            lot_depth_in_m: 37.2,
            lot_width_in_m: 10.1,
            storeys: 3,
            road_width_in_m: 11.0,
            laneway_width_in_m: 6.0,
            sidewalk_width_in_m: 8.0,
            max_block_length_in_m: 100.0,
            include_parks: false,
            one_park_per_this_many_housing_blocks: 4,
            average_unit_size_in_sq_m: 100.0,
        }
    }
}

impl NeighbourhoodParams {
    /// Check every invariant the geometry relies on.
    pub fn validate(&self) -> Result<(), NeighbourhoodError> {
        let reals = [
            ("front_yard_percent", self.front_yard_percent),
            ("side_yard_percent", self.side_yard_percent),
            ("back_yard_percent", self.back_yard_percent),
            ("lot_depth_in_m", self.lot_depth_in_m),
            ("lot_width_in_m", self.lot_width_in_m),
            ("road_width_in_m", self.road_width_in_m),
            ("laneway_width_in_m", self.laneway_width_in_m),
            ("sidewalk_width_in_m", self.sidewalk_width_in_m),
            ("max_block_length_in_m", self.max_block_length_in_m),
            ("average_unit_size_in_sq_m", self.average_unit_size_in_sq_m),
        ];
        for (name, value) in reals {
            if !value.is_finite() {
                return Err(NeighbourhoodError::invalid(
                    name,
                    format!("{value} is not a finite number"),
                ));
            }
        }

        let percents = [
            ("front_yard_percent", self.front_yard_percent),
            ("side_yard_percent", self.side_yard_percent),
            ("back_yard_percent", self.back_yard_percent),
        ];
        for (name, value) in percents {
            if !(0.0..=100.0).contains(&value) {
                return Err(NeighbourhoodError::invalid(
                    name,
                    format!("{value} is outside 0-100"),
                ));
            }
        }

        if self.lot_width_in_m <= 0.0 {
            return Err(NeighbourhoodError::invalid(
                "lot_width_in_m",
                format!("{} must be positive", self.lot_width_in_m),
            ));
        }
        if self.lot_depth_in_m <= 0.0 {
            return Err(NeighbourhoodError::invalid(
                "lot_depth_in_m",
                format!("{} must be positive", self.lot_depth_in_m),
            ));
        }
        if self.max_block_length_in_m < self.lot_width_in_m {
            return Err(NeighbourhoodError::invalid(
                "max_block_length_in_m",
                format!(
                    "{} is shorter than one lot ({} m)",
                    self.max_block_length_in_m, self.lot_width_in_m
                ),
            ));
        }
        let lots_per_row = self.max_block_length_in_m / self.lot_width_in_m;
        if lots_per_row.floor() > MAX_LOTS_PER_ROW as f64 {
            return Err(NeighbourhoodError::invalid(
                "max_block_length_in_m",
                format!(
                    "fits {lots_per_row:.0} lots of {} m in a row, the max is {MAX_LOTS_PER_ROW}",
                    self.lot_width_in_m
                ),
            ));
        }

        let widths = [
            ("road_width_in_m", self.road_width_in_m),
            ("laneway_width_in_m", self.laneway_width_in_m),
            ("sidewalk_width_in_m", self.sidewalk_width_in_m),
        ];
        for (name, value) in widths {
            if value < 0.0 {
                return Err(NeighbourhoodError::invalid(
                    name,
                    format!("{value} must not be negative"),
                ));
            }
        }

        let min_period = if self.include_parks { 2 } else { 1 };
        if self.one_park_per_this_many_housing_blocks < min_period {
            return Err(NeighbourhoodError::invalid(
                "one_park_per_this_many_housing_blocks",
                format!(
                    "{} must be at least {min_period}",
                    self.one_park_per_this_many_housing_blocks
                ),
            ));
        }

        if self.average_unit_size_in_sq_m <= 0.0 {
            return Err(NeighbourhoodError::invalid(
                "average_unit_size_in_sq_m",
                format!("{} must be positive", self.average_unit_size_in_sq_m),
            ));
        }

        Ok(())
    }
}
