//! Countdown timer on the embassy time driver
//!
//! Reads the free-running time base only, so it works from the
//! thread-mode main loop without an executor.

use embassy_time::{Duration, Instant};
use strobe_hal::CountdownTimer;

/// One-shot countdown against an absolute deadline
pub struct DeadlineTimer {
    deadline: Option<Instant>,
}

impl DeadlineTimer {
    /// A timer with no countdown running (reports elapsed)
    pub const fn new() -> Self {
        Self { deadline: None }
    }
}

impl Default for DeadlineTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownTimer for DeadlineTimer {
    fn start(&mut self, duration_ms: u32) {
        self.deadline = Some(Instant::now() + Duration::from_millis(duration_ms.into()));
    }

    fn has_elapsed(&mut self) -> bool {
        self.deadline
            .map_or(true, |deadline| Instant::now() >= deadline)
    }
}
