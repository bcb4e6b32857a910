//! State shared between interrupt context and the main loop

use crate::signal::{EventFlag, Mailbox};

/// Pending command byte and sample-ready flag
///
/// Created once (a `static` in firmware) and passed by reference to both
/// the producers and the [`super::MainLoop`]. Producers call the `on_*`
/// methods, the main loop calls the `take_*` methods.
pub struct Shared {
    command: Mailbox<u8>,
    sample_ready: EventFlag,
}

impl Shared {
    pub const fn new() -> Self {
        Self {
            command: Mailbox::new(),
            sample_ready: EventFlag::new(),
        }
    }

    /// Byte received on the serial port (interrupt context)
    pub fn on_byte_received(&self, byte: u8) {
        self.command.post(byte);
    }

    /// New sample captured (interrupt context)
    pub fn on_sample_ready(&self) {
        self.sample_ready.raise();
    }

    /// Take the most recent unhandled command byte
    pub fn take_command(&self) -> Option<u8> {
        self.command.take()
    }

    /// Consume the sample-ready event and copy the sample out with `read`
    ///
    /// The flag is cleared and `read` runs inside one critical section, so
    /// a producer cannot overwrite the sample between the two. Returns
    /// `None` without calling `read` when no sample is pending.
    pub fn take_sample<T>(&self, read: impl FnOnce() -> T) -> Option<T> {
        critical_section::with(|_| self.sample_ready.test_and_clear().then(read))
    }
}

impl Default for Shared {
    fn default() -> Self {
        Self::new()
    }
}
