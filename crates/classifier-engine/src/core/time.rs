/// Wall-clock bookkeeping between animation frames.
/// Motion advances by a fixed amount per frame; the elapsed time reported
/// here is informational only.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Timestamp of the previous frame in milliseconds.
    last_frame_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_frame_ms: None }
    }

    /// Forget the previous frame. The next `tick` reports zero elapsed time.
    pub fn reset(&mut self) {
        self.last_frame_ms = None;
    }

    /// Record a frame at `now_ms`. Returns milliseconds since the previous frame.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let elapsed = self
            .last_frame_ms
            .map(|last| (now_ms - last).max(0.0))
            .unwrap_or(0.0);
        self.last_frame_ms = Some(now_ms);
        elapsed
    }

    pub fn last_frame(&self) -> Option<f64> {
        self.last_frame_ms
    }
}
