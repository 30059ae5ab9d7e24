// ---------------------------------------------------------------------------
// NeighbourhoodError: failures of a statistics, layout, or render pass
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors produced while computing statistics, planning a layout, or rendering.
///
/// All three kinds are synchronous failures of the call that triggered them.
/// None are retried automatically.
#[derive(Debug, Clone, PartialEq)]
pub enum NeighbourhoodError {
    /// A parameter is outside the range the geometry can handle.
    InvalidParameter { name: &'static str, reason: String },
    /// The land-use areas do not add up to the neighbourhood footprint.
    /// Always an internal derivation bug, never a user-input problem.
    AreaMismatch {
        expected_sq_m: f64,
        calculated_sq_m: f64,
    },
    /// The layout would draw more buildings than the renderer allows.
    TooManyBuildings { requested: usize, max: usize },
}

impl NeighbourhoodError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        NeighbourhoodError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for NeighbourhoodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeighbourhoodError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter {name}: {reason}")
            }
            NeighbourhoodError::AreaMismatch {
                expected_sq_m,
                calculated_sq_m,
            } => write!(
                f,
                "Land-use areas do not reconcile: expectedArea={expected_sq_m}, calculatedArea={calculated_sq_m}"
            ),
            NeighbourhoodError::TooManyBuildings { requested, max } => write!(
                f,
                "Not drawing, too many buildings. Would draw {requested}, the max is {max}"
            ),
        }
    }
}

impl std::error::Error for NeighbourhoodError {}
