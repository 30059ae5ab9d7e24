//! Land-use model.
//!
//! Turns a [`NeighbourhoodParams`](crate::params::NeighbourhoodParams) into
//! land-use statistics. A single representative block is broken down by land
//! use, a repeating group of blocks (one of which may be a park) is
//! aggregated, and the result is normalized to one square kilometre:
//!
//! ```text
//!  __________________
//! |  ________________
//! | |  _ _ _ _ _ _  |
//! | | | | | | | | | |
//! | | |_|_|_|_|_|_| |
//! |     _ _ _ _ _ _
//! | | | | | | | | | |
//! | | |_|_|_|_|_|_| |
//! | |_______________|
//! ```
//!
//! Road runs along the top and left of each block, sidewalk surrounds it, and
//! two rows of lots sit back to back across a laneway.
//!
//! Every computation checks that the land uses add up to the footprint of the
//! blocks they were derived from; a mismatch is reported as
//! [`NeighbourhoodError::AreaMismatch`](crate::error::NeighbourhoodError).
//!
//! Everything here is pure: no I/O, no ECS access.

pub mod block;
pub mod geometry;
pub mod stats;

pub use block::BlockLandUseAreas;
pub use geometry::{building_depth, building_width, max_adjacent_lots, BlockGeometry};
pub use stats::{compute_statistics, NeighbourhoodAreas, NeighbourhoodStatistics};
