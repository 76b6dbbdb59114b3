use crate::api::animator::AnimatorCommand;

/// The scripted confetti run after a qualifying result: start, stop after a
/// short burst, then clear once the last pieces have had time to fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CelebrationScript {
    /// Delay from start to stop.
    pub stop_after_ms: u32,
    /// Delay from stop to clear.
    pub clear_after_ms: u32,
}

impl Default for CelebrationScript {
    fn default() -> Self {
        Self {
            stop_after_ms: 600,
            clear_after_ms: 1000,
        }
    }
}

impl CelebrationScript {
    pub fn new(stop_after_ms: u32, clear_after_ms: u32) -> Self {
        Self { stop_after_ms, clear_after_ms }
    }

    /// Commands with their offset from the start of the script, in order.
    pub fn steps(&self) -> [(u32, AnimatorCommand); 3] {
        [
            (0, AnimatorCommand::Start),
            (self.stop_after_ms, AnimatorCommand::Stop),
            (
                self.stop_after_ms.saturating_add(self.clear_after_ms),
                AnimatorCommand::Clear,
            ),
        ]
    }
}
