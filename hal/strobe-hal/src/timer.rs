//! Countdown timer abstraction
//!
//! A second, independent timer used to measure fixed wall-clock holds
//! (note durations) without touching the sampling timer.

/// One-shot countdown timer
pub trait CountdownTimer {
    /// Restart the countdown from zero with the given duration
    fn start(&mut self, duration_ms: u32);

    /// Check whether the countdown has elapsed
    ///
    /// Stays true until the next [`CountdownTimer::start`].
    fn has_elapsed(&mut self) -> bool;

    /// Busy-wait until the countdown elapses
    fn wait(&mut self) {
        while !self.has_elapsed() {
            core::hint::spin_loop();
        }
    }

    /// Start a countdown and busy-wait for it
    fn hold(&mut self, duration_ms: u32) {
        self.start(duration_ms);
        self.wait();
    }
}
