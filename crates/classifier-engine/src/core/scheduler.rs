use std::collections::VecDeque;

/// Handle of a pending frame request, used to cancel it.
/// Matches the integer id returned by `requestAnimationFrame`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host primitive that invokes the animator's frame callback once per
/// display refresh.
///
/// Each request schedules exactly one callback. The animator re-requests from
/// inside the callback to keep the loop running, and cancels the pending
/// handle to stop it.
pub trait FrameScheduler {
    /// Schedule one frame callback. Returns `None` if the host refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancel a previously requested frame. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// In-memory scheduler for headless drivers and tests.
/// Requests queue up in order; the driver pops them and calls `Animator::frame`.
#[derive(Debug, Default)]
pub struct QueuedScheduler {
    next_id: i32,
    pending: VecDeque<FrameHandle>,
    cancelled: usize,
}

impl QueuedScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest pending request, if any.
    pub fn take_due(&mut self) -> Option<FrameHandle> {
        self.pending.pop_front()
    }

    /// Number of frames waiting to run.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// How many pending requests have been cancelled so far.
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for QueuedScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push_back(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|h| *h != handle);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_get_distinct_handles() {
        let mut s = QueuedScheduler::new();
        let a = s.request_frame().unwrap();
        let b = s.request_frame().unwrap();
        assert_ne!(a, b);
        assert_eq!(s.pending_len(), 2);
    }

    #[test]
    fn take_due_is_fifo() {
        let mut s = QueuedScheduler::new();
        let a = s.request_frame().unwrap();
        let b = s.request_frame().unwrap();
        assert_eq!(s.take_due(), Some(a));
        assert_eq!(s.take_due(), Some(b));
        assert_eq!(s.take_due(), None);
    }

    #[test]
    fn cancel_removes_pending() {
        let mut s = QueuedScheduler::new();
        let a = s.request_frame().unwrap();
        s.cancel_frame(a);
        assert_eq!(s.pending_len(), 0);
        assert_eq!(s.cancelled(), 1);

        // Cancelling twice is harmless
        s.cancel_frame(a);
        assert_eq!(s.cancelled(), 1);
    }
}
