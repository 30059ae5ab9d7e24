//! Tiling layout engine.
//!
//! Converts a parameter record into drawing units and works out how many block
//! rows and columns are needed to cover a drawing surface of a given size.
//! Metres are converted with one fixed linear scale ([`TilingConfig`]); it is
//! a tunable constant rather than something fitted to the surface.
//!
//! Blocks are laid out on a regular grid. Each block's position and kind
//! (housing or park) is a pure function of its grid coordinates, so a
//! renderer can draw any block without carrying state from its neighbours.
//!
//! The plan also carries the drawing safety bound: a layout that would draw
//! more than [`MAX_BUILDINGS_TO_DRAW`](crate::config::MAX_BUILDINGS_TO_DRAW)
//! buildings is refused by [`TiledLayoutPlan::ensure_within_budget`].

pub mod plan;

pub use plan::{
    block_kind, is_park_block, plan_layout, plan_layout_with_scale, BlockKind, BlockPlacement,
    TiledLayoutPlan, TilingConfig,
};
