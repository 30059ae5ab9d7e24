//! Top-down rendering of a tiled neighbourhood.
//!
//! Paints the road background, then every block of the layout plan: a
//! sidewalk border, and inside it either a park or two rows of lots back to
//! back across a laneway. The back row is drawn in a frame rotated by 180°,
//! so every building's front yard faces its own row's street.

use std::f64::consts::PI;

use simulation::land_use::{building_depth, building_width};
use simulation::params::NeighbourhoodParams;
use simulation::tiling::{BlockKind, BlockPlacement, TiledLayoutPlan};
use simulation::NeighbourhoodError;

use crate::palette::{
    BUILDING_COLOUR, LOT_OUTLINE_COLOUR, PARK_COLOUR, ROAD_COLOUR, SIDEWALK_COLOUR, YARD_COLOUR,
};
use crate::surface::{DrawSurface, SavedState};

/// Inset of the yard fill inside the lot outline, in drawing units.
const YARD_INSET: f64 = 1.0;

/// Which way a lot's front yard points within its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LotFacing {
    /// Front yard along the top edge (the street above the block).
    Up,
    /// Front yard along the bottom edge (the street below the block).
    Down,
}

/// Lot and building rectangles in drawing units, relative to the lot corner.
#[derive(Debug, Clone, Copy)]
struct LotSketch {
    width: f64,
    depth: f64,
    building_x: f64,
    building_y: f64,
    building_width: f64,
    building_depth: f64,
}

impl LotSketch {
    fn new(params: &NeighbourhoodParams, plan: &TiledLayoutPlan) -> Self {
        let width = plan.lot_draw_width;
        let depth = plan.lot_draw_depth;
        Self {
            width,
            depth,
            building_x: width * params.side_yard_percent / 100.0,
            building_y: depth * params.front_yard_percent / 100.0,
            building_width: building_width(width, params.side_yard_percent),
            building_depth: building_depth(
                depth,
                params.front_yard_percent,
                params.back_yard_percent,
            ),
        }
    }
}

/// Paint the neighbourhood described by `params` and `plan` onto `surface`.
///
/// Fails without drawing on invalid parameters. A plan over the building
/// budget fails after the background fill and before any block is drawn.
/// The surface's transform stack is balanced on every return path.
pub fn render<S: DrawSurface + ?Sized>(
    surface: &mut S,
    params: &NeighbourhoodParams,
    plan: &TiledLayoutPlan,
) -> Result<(), NeighbourhoodError> {
    params.validate()?;

    let mut canvas = SavedState::new(surface);
    canvas.clear();
    canvas.fill_rect(0.0, 0.0, plan.surface_width, plan.surface_height, ROAD_COLOUR);

    plan.ensure_within_budget()?;

    let lot = LotSketch::new(params, plan);
    for block in plan.blocks(params) {
        draw_block(&mut *canvas, plan, &lot, &block);
    }
    Ok(())
}

fn draw_block<S: DrawSurface + ?Sized>(
    surface: &mut S,
    plan: &TiledLayoutPlan,
    lot: &LotSketch,
    block: &BlockPlacement,
) {
    let sidewalk = plan.sidewalk_draw_width;
    let mut scope = SavedState::new(surface);
    scope.translate(block.origin.x, block.origin.y);
    scope.fill_rect(
        0.0,
        0.0,
        plan.block_draw_length + 2.0 * sidewalk,
        plan.block_draw_height + 2.0 * sidewalk,
        SIDEWALK_COLOUR,
    );
    scope.translate(sidewalk, sidewalk);

    match block.kind {
        BlockKind::Park => scope.fill_rect(
            0.0,
            0.0,
            plan.block_draw_length,
            plan.block_draw_height,
            PARK_COLOUR,
        ),
        BlockKind::Housing => draw_housing_block(&mut *scope, plan, lot),
    }
}

fn draw_housing_block<S: DrawSurface + ?Sized>(
    surface: &mut S,
    plan: &TiledLayoutPlan,
    lot: &LotSketch,
) {
    draw_lot_row(surface, plan, lot, 0.0, LotFacing::Up);

    {
        let mut laneway = SavedState::new(&mut *surface);
        laneway.translate(0.0, lot.depth);
        laneway.fill_rect(
            0.0,
            0.0,
            lot.width * plan.lots_per_row as f64,
            plan.laneway_draw_width,
            ROAD_COLOUR,
        );
    }

    draw_lot_row(
        surface,
        plan,
        lot,
        lot.depth + plan.laneway_draw_width,
        LotFacing::Down,
    );
}

fn draw_lot_row<S: DrawSurface + ?Sized>(
    surface: &mut S,
    plan: &TiledLayoutPlan,
    lot: &LotSketch,
    row_offset: f64,
    facing: LotFacing,
) {
    let mut row = SavedState::new(surface);
    row.translate(0.0, row_offset);
    for index in 0..plan.lots_per_row {
        draw_lot(&mut *row, lot, index as f64 * lot.width, facing);
    }
}

fn draw_lot<S: DrawSurface + ?Sized>(
    surface: &mut S,
    lot: &LotSketch,
    offset_x: f64,
    facing: LotFacing,
) {
    let mut scope = SavedState::new(surface);
    scope.translate(offset_x, 0.0);
    if facing == LotFacing::Down {
        scope.translate(lot.width, lot.depth);
        scope.rotate(PI);
    }

    scope.stroke_rect(0.0, 0.0, lot.width, lot.depth, LOT_OUTLINE_COLOUR);
    scope.fill_rect(
        YARD_INSET,
        YARD_INSET,
        (lot.width - 2.0 * YARD_INSET).max(0.0),
        (lot.depth - 2.0 * YARD_INSET).max(0.0),
        YARD_COLOUR,
    );
    scope.fill_rect(
        lot.building_x,
        lot.building_y,
        lot.building_width,
        lot.building_depth,
        BUILDING_COLOUR,
    );
}
