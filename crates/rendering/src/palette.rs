//! Land-use colours for the top-down neighbourhood view.

/// An opaque sRGB colour, independent of any drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceColour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SurfaceColour {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BUILDING_COLOUR: SurfaceColour = SurfaceColour::rgb(0, 82, 110);
pub const YARD_COLOUR: SurfaceColour = SurfaceColour::rgb(240, 240, 240);
/// Roads, laneways, and the background between blocks.
pub const ROAD_COLOUR: SurfaceColour = SurfaceColour::rgb(84, 84, 84);
pub const PARK_COLOUR: SurfaceColour = SurfaceColour::rgb(57, 178, 30);
pub const SIDEWALK_COLOUR: SurfaceColour = SurfaceColour::rgb(209, 209, 209);
pub const LOT_OUTLINE_COLOUR: SurfaceColour = SurfaceColour::rgb(0, 0, 0);
