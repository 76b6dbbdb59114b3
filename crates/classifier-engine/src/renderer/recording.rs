use glam::Vec2;

use super::traits::{DrawingSurface, Stroke, SurfaceHost};

/// Surface that records draw calls instead of rasterizing them.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    /// Strokes issued since the last `clear`.
    pub strokes: Vec<Stroke>,
    /// Number of `clear` calls (one per drawn frame).
    pub clears: usize,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            strokes: Vec::new(),
            clears: 0,
        }
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.strokes.clear();
        self.clears += 1;
    }

    fn stroke(&mut self, stroke: &Stroke) {
        self.strokes.push(*stroke);
    }
}

/// Host whose container can be toggled present/absent, counting mounts.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    size: Vec2,
    /// Whether the host container exists. `mount` fails when false.
    pub container_present: bool,
    pub mounts: usize,
    pub unmounts: usize,
}

impl RecordingHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            container_present: true,
            mounts: 0,
            unmounts: 0,
        }
    }

    /// A host with no container: every mount fails.
    pub fn missing_container() -> Self {
        Self {
            container_present: false,
            ..Self::new(0.0, 0.0)
        }
    }

    /// Surfaces currently mounted.
    pub fn live(&self) -> usize {
        self.mounts - self.unmounts
    }
}

impl SurfaceHost for RecordingHost {
    type Surface = RecordingSurface;

    fn mount(&mut self) -> Option<RecordingSurface> {
        if !self.container_present {
            return None;
        }
        self.mounts += 1;
        Some(RecordingSurface::new(self.size.x, self.size.y))
    }

    fn unmount(&mut self, _surface: RecordingSurface) {
        self.unmounts += 1;
    }
}
