//! Table-driven waveform output
//!
//! Abstracts a DMA channel that repeatedly copies a sample table into a
//! DAC data register, one sample per sample-clock tick. The sample-clock
//! period sets the output frequency; a period of zero stops the clock
//! and silences the output.

/// Repeating table-to-DAC stream
pub trait WaveformStream {
    /// Error type for stream operations
    type Error;

    /// Reset the stream and start repeating `table`
    ///
    /// Callers should wait for [`WaveformStream::block_complete`] first
    /// so the switch does not cut a block in half.
    fn load_table(&mut self, table: &'static [u16]) -> Result<(), Self::Error>;

    /// Set the sample-clock period in timer ticks (0 = silent)
    fn set_sample_period(&mut self, period: u16) -> Result<(), Self::Error>;

    /// Check whether the current block transfer has completed
    ///
    /// Always true while the sample clock is stopped.
    fn block_complete(&mut self) -> bool;
}
