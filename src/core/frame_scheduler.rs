//! Animation-frame coalescing
//!
//! High-frequency signals (scroll, resize) should trigger at most one piece of
//! work per rendered frame. [`FrameCoalescer`] tracks whether a frame is already
//! scheduled so that extra signals collapse into the pending one instead of
//! queueing up.
//!
//! ```
//! # use cordon::core::frame_scheduler::FrameCoalescer;
//! let mut frames = FrameCoalescer::new();
//!
//! // First signal schedules a frame
//! assert!(frames.request());
//! // Further signals before the frame runs are collapsed
//! assert!(!frames.request());
//!
//! // Frame runs, next signal may schedule again
//! assert!(frames.begin_frame());
//! assert!(frames.request());
//! ```

/// Scheduling state of a coalescer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FrameState {
    /// Nothing scheduled
    #[default]
    Idle,
    /// One frame is scheduled and has not run yet
    Pending,
    /// Torn down; never schedules or runs again
    Detached,
}

/// At-most-one-pending-frame token
#[derive(Clone, Debug, Default)]
pub struct FrameCoalescer {
    state: FrameState,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Register a signal
    ///
    /// Returns `true` if the caller should schedule a frame now.
    pub fn request(&mut self) -> bool {
        match self.state {
            FrameState::Idle => {
                self.state = FrameState::Pending;
                true
            }
            FrameState::Pending | FrameState::Detached => false,
        }
    }

    /// Called from the scheduled frame callback
    ///
    /// Clears the pending token and returns `true` if the frame's work should
    /// run. A stale callback arriving after [`detach`](Self::detach) gets
    /// `false`.
    pub fn begin_frame(&mut self) -> bool {
        match self.state {
            FrameState::Pending => {
                self.state = FrameState::Idle;
                true
            }
            FrameState::Idle | FrameState::Detached => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == FrameState::Pending
    }

    pub fn is_attached(&self) -> bool {
        self.state != FrameState::Detached
    }

    /// Enter the terminal state
    pub fn detach(&mut self) {
        self.state = FrameState::Detached;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let frames = FrameCoalescer::new();
        assert_eq!(frames.state(), FrameState::Idle);
        assert!(!frames.is_pending());
        assert!(frames.is_attached());
    }

    #[test]
    fn test_burst_collapses_into_one_frame() {
        let mut frames = FrameCoalescer::new();

        let scheduled = (0..25).filter(|_| frames.request()).count();
        assert_eq!(scheduled, 1);
        assert!(frames.is_pending());

        assert!(frames.begin_frame());
        assert!(!frames.begin_frame());
        assert_eq!(frames.state(), FrameState::Idle);
    }

    #[test]
    fn test_reschedules_after_frame() {
        let mut frames = FrameCoalescer::new();
        assert!(frames.request());
        assert!(frames.begin_frame());
        assert!(frames.request());
        assert!(frames.is_pending());
    }

    #[test]
    fn test_frame_without_request_does_nothing() {
        let mut frames = FrameCoalescer::new();
        assert!(!frames.begin_frame());
        assert_eq!(frames.state(), FrameState::Idle);
    }

    #[test]
    fn test_detach_drops_pending_frame() {
        let mut frames = FrameCoalescer::new();
        assert!(frames.request());
        frames.detach();

        assert!(!frames.begin_frame());
        assert!(!frames.request());
        assert!(!frames.is_attached());
        assert_eq!(frames.state(), FrameState::Detached);
    }
}
