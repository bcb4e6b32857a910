//! Single-bit event flag

use portable_atomic::{AtomicBool, Ordering};

/// Sample/event flag raised by an interrupt handler and consumed by the
/// main loop
///
/// Test and clear happen in one atomic swap, so an interrupt landing
/// between the two can never be lost or reported twice.
#[derive(Debug)]
pub struct EventFlag {
    raised: AtomicBool,
}

impl EventFlag {
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    /// Mark an event as pending (interrupt context)
    ///
    /// Raising an already raised flag is a no-op: the earlier event is
    /// merged into this one.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Consume the pending event, if any (main loop)
    pub fn test_and_clear(&self) -> bool {
        self.raised.swap(false, Ordering::AcqRel)
    }

    /// Peek without consuming
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}

impl Default for EventFlag {
    fn default() -> Self {
        Self::new()
    }
}
