/// Square metres in one square kilometre. Statistics are normalized to this area.
pub const SQ_M_PER_SQ_KM: f64 = 1_000_000.0;

/// Absolute tolerance (m²) when reconciling the land-use areas against the
/// expected neighbourhood footprint.
pub const AREA_TOLERANCE_SQ_M: f64 = 0.01;

/// Metres to drawing units. Chosen so the default parameters look reasonable
/// on a typical window; it is not derived from the input.
pub const DEFAULT_DRAW_SCALE: f64 = 2.07;

/// Maximum number of buildings a single render may draw before it is refused.
pub const MAX_BUILDINGS_TO_DRAW: usize = 10_000;

/// Most lots a single row may hold. Keeps lot counts representable as `usize`
/// on every target, 32-bit included.
pub const MAX_LOTS_PER_ROW: usize = 1_000_000;

// ---------------------------------------------------------------------------
// Input ranges accepted by the parameter form
// ---------------------------------------------------------------------------

/// Storeys slider range.
pub const STOREYS_RANGE: (u32, u32) = (0, 50);

/// Road, sidewalk, and laneway width slider range (metres).
pub const STREET_WIDTH_RANGE_M: (f64, f64) = (0.0, 30.0);

/// Max block length slider range (metres).
pub const MAX_BLOCK_LENGTH_RANGE_M: (f64, f64) = (1.0, 300.0);

/// Park period slider range (blocks).
pub const PARK_PERIOD_RANGE: (u32, u32) = (2, 20);
