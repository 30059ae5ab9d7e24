pub mod egui_surface;
pub mod neighbourhood_render;
pub mod palette;
pub mod recording;
pub mod surface;

mod tests;

pub use egui_surface::EguiSurface;
pub use neighbourhood_render::render;
pub use recording::{PaintKind, PaintedRect, RecordingSurface, SurfaceCall};
pub use surface::{DrawSurface, SavedState};
