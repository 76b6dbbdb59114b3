//! Drawing-surface contract for the confetti animator.
//!
//! The engine never touches a concrete canvas: it hands `Stroke`s to a
//! `DrawingSurface` mounted by a `SurfaceHost`. The web bridge implements
//! both on top of Canvas 2D; `recording` provides an in-memory pair.

pub mod color;
pub mod recording;
pub mod traits;
