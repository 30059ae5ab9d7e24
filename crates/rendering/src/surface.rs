//! Drawing-surface capability and scoped transform state.
//!
//! The renderer never creates or sizes a surface; it only issues calls
//! against [`DrawSurface`]. Every change to the transform happens inside a
//! [`SavedState`] guard, which restores the surface when it goes out of scope,
//! so the save/restore stack stays balanced on every exit path.

use std::ops::{Deref, DerefMut};

use crate::palette::SurfaceColour;

/// A 2-D surface with a canvas-style transform stack.
///
/// Rectangles are given in the current local frame. `translate` and `rotate`
/// compose onto the current transform; `save` pushes it and `restore` pops it.
pub trait DrawSurface {
    /// Wipe the surface.
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, colour: SurfaceColour);
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64, colour: SurfaceColour);
    fn translate(&mut self, dx: f64, dy: f64);
    /// Rotate the local frame clockwise on screen (y grows downwards).
    fn rotate(&mut self, radians: f64);
    fn save(&mut self);
    fn restore(&mut self);
}

/// Saves the surface state on creation and restores it on drop.
///
/// Derefs to the surface, so drawing goes through the guard.
pub struct SavedState<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawSurface + ?Sized> SavedState<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: DrawSurface + ?Sized> Deref for SavedState<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &*self.surface
    }
}

impl<S: DrawSurface + ?Sized> DerefMut for SavedState<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.surface
    }
}

impl<S: DrawSurface + ?Sized> Drop for SavedState<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
