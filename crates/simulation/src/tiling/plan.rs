//! Layout plan: how many blocks cover a drawing surface and where each sits.

use bevy::math::DVec2;
use bevy::prelude::*;
use serde::Serialize;

use crate::config::{DEFAULT_DRAW_SCALE, MAX_BUILDINGS_TO_DRAW};
use crate::error::NeighbourhoodError;
use crate::land_use::max_adjacent_lots;
use crate::params::NeighbourhoodParams;

// =============================================================================
// Configuration
// =============================================================================

/// Runtime tiling settings.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TilingConfig {
    /// Drawing units per metre.
    pub draw_scale: f64,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            draw_scale: DEFAULT_DRAW_SCALE,
        }
    }
}

// =============================================================================
// Block classification
// =============================================================================

/// What occupies a block in the tiled grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockKind {
    Housing,
    Park,
}

/// Whether the block at (`column`, `row`) is a park.
///
/// Columns are numbered from 1 and rows from 0. The result depends only on
/// the block coordinates, so the diagonal park stripes are the same however
/// the grid is traversed.
pub fn is_park_block(params: &NeighbourhoodParams, column: usize, row: usize) -> bool {
    let period = params.one_park_per_this_many_housing_blocks as usize;
    params.include_parks && period > 0 && (column + row) % period == 0
}

pub fn block_kind(params: &NeighbourhoodParams, column: usize, row: usize) -> BlockKind {
    if is_park_block(params, column, row) {
        BlockKind::Park
    } else {
        BlockKind::Housing
    }
}

/// One block in the tiled grid, positioned at the outer corner of its sidewalk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockPlacement {
    pub row: usize,
    pub column: usize,
    pub origin: DVec2,
    pub kind: BlockKind,
}

// =============================================================================
// Plan
// =============================================================================

/// Repeating block geometry in drawing units, and the grid that covers a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TiledLayoutPlan {
    pub surface_width: f64,
    pub surface_height: f64,
    pub draw_scale: f64,
    pub rows: usize,
    pub columns: usize,
    pub lots_per_row: usize,
    pub lot_draw_width: f64,
    pub lot_draw_depth: f64,
    pub road_draw_width: f64,
    pub laneway_draw_width: f64,
    pub sidewalk_draw_width: f64,
    /// Length of one row of lots.
    pub block_draw_length: f64,
    /// Two lot depths plus the laneway.
    pub block_draw_height: f64,
}

/// Plan a layout using the default draw scale.
pub fn plan_layout(
    params: &NeighbourhoodParams,
    surface_width: f64,
    surface_height: f64,
) -> Result<TiledLayoutPlan, NeighbourhoodError> {
    plan_layout_with_scale(params, surface_width, surface_height, DEFAULT_DRAW_SCALE)
}

/// Plan a layout for a `surface_width` x `surface_height` surface.
///
/// The row and column counts are loose upper bounds: they ignore the road and
/// sidewalk at the far edge, so the surface is always fully covered.
pub fn plan_layout_with_scale(
    params: &NeighbourhoodParams,
    surface_width: f64,
    surface_height: f64,
    draw_scale: f64,
) -> Result<TiledLayoutPlan, NeighbourhoodError> {
    params.validate()?;
    for (name, value) in [
        ("surface_width", surface_width),
        ("surface_height", surface_height),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(NeighbourhoodError::invalid(
                name,
                format!("{value} is not a usable surface size"),
            ));
        }
    }
    if !draw_scale.is_finite() || draw_scale <= 0.0 {
        return Err(NeighbourhoodError::invalid(
            "draw_scale",
            format!("{draw_scale} must be positive"),
        ));
    }

    let lots_per_row = max_adjacent_lots(params.max_block_length_in_m, params.lot_width_in_m);
    let to_draw = |metres: f64| metres * draw_scale;

    let lot_draw_width = to_draw(params.lot_width_in_m);
    let lot_draw_depth = to_draw(params.lot_depth_in_m);
    let road_draw_width = to_draw(params.road_width_in_m);
    let laneway_draw_width = to_draw(params.laneway_width_in_m);
    let sidewalk_draw_width = to_draw(params.sidewalk_width_in_m);
    let block_draw_length = to_draw(lots_per_row as f64 * params.lot_width_in_m);
    let block_draw_height = 2.0 * lot_draw_depth + laneway_draw_width;

    let rows = (surface_height / (block_draw_height + road_draw_width)).ceil() as usize;
    let columns = (surface_width / block_draw_length).ceil() as usize;

    Ok(TiledLayoutPlan {
        surface_width,
        surface_height,
        draw_scale,
        rows,
        columns,
        lots_per_row,
        lot_draw_width,
        lot_draw_depth,
        road_draw_width,
        laneway_draw_width,
        sidewalk_draw_width,
        block_draw_length,
        block_draw_height,
    })
}

impl TiledLayoutPlan {
    /// Buildings a full render would draw: two rows of lots per block.
    pub fn building_count(&self) -> usize {
        self.rows
            .saturating_mul(self.columns)
            .saturating_mul(self.lots_per_row)
            .saturating_mul(2)
    }

    /// Refuse plans that would draw more than [`MAX_BUILDINGS_TO_DRAW`] buildings.
    pub fn ensure_within_budget(&self) -> Result<(), NeighbourhoodError> {
        let requested = self.building_count();
        if requested > MAX_BUILDINGS_TO_DRAW {
            return Err(NeighbourhoodError::TooManyBuildings {
                requested,
                max: MAX_BUILDINGS_TO_DRAW,
            });
        }
        Ok(())
    }

    /// Horizontal distance from one block's sidewalk corner to the next.
    pub fn column_pitch(&self) -> f64 {
        self.road_draw_width + self.block_draw_length + 2.0 * self.sidewalk_draw_width
    }

    /// Vertical distance from one block's sidewalk corner to the next.
    pub fn row_pitch(&self) -> f64 {
        self.road_draw_width + self.block_draw_height + 2.0 * self.sidewalk_draw_width
    }

    /// Outer sidewalk corner of the block at `row` (from 0), `column` (from 1).
    /// Every block has road above it and to its left.
    pub fn block_origin(&self, row: usize, column: usize) -> DVec2 {
        let column_offset = column.saturating_sub(1) as f64;
        DVec2::new(
            self.road_draw_width + column_offset * self.column_pitch(),
            self.road_draw_width + row as f64 * self.row_pitch(),
        )
    }

    /// Every block in the grid, row by row.
    pub fn blocks<'a>(
        &'a self,
        params: &'a NeighbourhoodParams,
    ) -> impl Iterator<Item = BlockPlacement> + 'a {
        (0..self.rows).flat_map(move |row| {
            (1..=self.columns).map(move |column| BlockPlacement {
                row,
                column,
                origin: self.block_origin(row, column),
                kind: block_kind(params, column, row),
            })
        })
    }
}
