//! Surface traits implemented by rendering backends.
//!
//! The web bridge implements these with an `HtmlCanvasElement` and its 2D
//! context; tests use `RecordingHost`/`RecordingSurface`.

use glam::Vec2;

use super::color::Rgba;

/// One line segment to stroke, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub from: Vec2,
    pub to: Vec2,
    /// Line width in pixels.
    pub width: f32,
    pub color: Rgba,
}

/// A mounted drawing surface covering the visible viewport.
pub trait DrawingSurface {
    /// Current drawable size (width, height) in pixels.
    fn size(&self) -> Vec2;

    /// Erase the whole visible region.
    fn clear(&mut self);

    /// Stroke a single segment.
    fn stroke(&mut self, stroke: &Stroke);
}

/// Owner of the container the surface is mounted into.
pub trait SurfaceHost {
    type Surface: DrawingSurface;

    /// Create a surface and insert it into the host container.
    /// Returns `None` when the container (or a drawing context) is unavailable.
    fn mount(&mut self) -> Option<Self::Surface>;

    /// Remove a surface previously returned by `mount`.
    fn unmount(&mut self, surface: Self::Surface);
}
