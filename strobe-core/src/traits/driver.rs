//! Peripheral driver trait

/// One hardware subsystem seen by the main loop
///
/// A driver owns no pipeline state beyond its hardware; whether a new
/// sample is available is signalled separately through the shared
/// [`crate::signal::EventFlag`].
pub trait PeripheralDriver {
    /// Input/output selection applied by [`PeripheralDriver::configure`]
    type Config: Copy;

    /// Raw sample produced by [`PeripheralDriver::read_latest`]
    type Sample;

    /// Error type for bus or peripheral failures
    type Error;

    /// Apply a new selection
    ///
    /// Safe to call from the main loop at any time. Takes effect from the
    /// next sampling or playback cycle, not necessarily the one in flight.
    fn configure(&mut self, config: Self::Config) -> Result<(), Self::Error>;

    /// Arm the periodic trigger
    ///
    /// After this the peripheral's interrupt raises the sample flag once
    /// per unit of work (one conversion, one block, one data-ready edge).
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Read the most recently captured sample
    ///
    /// Only meaningful right after the sample flag was observed set.
    fn read_latest(&mut self) -> Result<Self::Sample, Self::Error>;
}
