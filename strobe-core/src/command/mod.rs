//! Command byte dispatch
//!
//! Each byte received on the serial port is an independent command; there
//! is no sequencing, framing or acknowledgement. A dispatcher owns the
//! driver's current configuration, maps recognized bytes to changes of it
//! and pushes those changes to the driver. Unrecognized bytes are ignored
//! without touching anything.

pub mod adc;
pub mod synth;

pub use adc::InputSelect;
pub use synth::{SynthCommand, SynthDispatcher};

use crate::traits::PeripheralDriver;

/// Result of dispatching one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// The byte was a command and has been applied
    Applied,
    /// The byte is not a command; nothing changed
    Ignored,
}

/// Maps command bytes to driver configuration changes
pub trait Dispatcher<D: PeripheralDriver> {
    /// Configuration the driver should currently be running with
    fn config(&self) -> D::Config;

    /// Handle one received byte
    fn dispatch(&mut self, byte: u8, driver: &mut D) -> Result<Dispatch, D::Error>;

    /// Advance time-driven work started by an earlier command
    ///
    /// Called once per loop iteration. Dispatchers without such work keep
    /// the default.
    fn poll(&mut self, _driver: &mut D) -> Result<(), D::Error> {
        Ok(())
    }
}

/// Dispatcher for drivers that take no commands
///
/// Every byte is ignored and the configuration never changes.
#[derive(Debug, Clone, Copy)]
pub struct NoCommands<C> {
    config: C,
}

impl<C: Copy> NoCommands<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

impl<D: PeripheralDriver> Dispatcher<D> for NoCommands<D::Config> {
    fn config(&self) -> D::Config {
        self.config
    }

    fn dispatch(&mut self, _byte: u8, _driver: &mut D) -> Result<Dispatch, D::Error> {
        Ok(Dispatch::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Driver counting configure calls
    struct Counter {
        configured: usize,
    }

    impl PeripheralDriver for Counter {
        type Config = u8;
        type Sample = ();
        type Error = ();

        fn configure(&mut self, _config: u8) -> Result<(), ()> {
            self.configured += 1;
            Ok(())
        }

        fn start(&mut self) -> Result<(), ()> {
            Ok(())
        }

        fn read_latest(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn test_no_commands_ignores_every_byte() {
        let mut dispatcher = NoCommands::new(7u8);
        let mut driver = Counter { configured: 0 };
        for byte in 0..=u8::MAX {
            assert_eq!(dispatcher.dispatch(byte, &mut driver), Ok(Dispatch::Ignored));
        }
        assert_eq!(Dispatcher::<Counter>::config(&dispatcher), 7);
        assert_eq!(driver.configured, 0);
    }

    #[test]
    fn test_default_poll_does_nothing() {
        let mut dispatcher = NoCommands::new(0u8);
        let mut driver = Counter { configured: 0 };
        assert_eq!(dispatcher.poll(&mut driver), Ok(()));
        assert_eq!(driver.configured, 0);
    }
}
