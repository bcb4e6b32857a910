//! Phase-accumulator table stepping
//!
//! Boards without a DMA-fed DAC emulate the sample clock in software: a
//! fixed-rate output tick advances a 32-bit phase whose top eight bits
//! index the 256-entry table. The increment is chosen so the table is
//! traversed at the same rate the hardware sample clock would.

use super::notes::SAMPLE_CLOCK_HZ;

/// Fractional table position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseAccumulator {
    phase: u32,
    increment: u32,
}

impl PhaseAccumulator {
    pub const fn new() -> Self {
        Self {
            phase: 0,
            increment: 0,
        }
    }

    /// Phase increment per output tick for a sample-clock period
    ///
    /// Zero when the period or the output rate is zero. Periods too short
    /// for the output rate saturate (the tone aliases).
    pub fn increment_for(period: u16, output_rate_hz: u32) -> u32 {
        if period == 0 || output_rate_hz == 0 {
            return 0;
        }
        let numerator = (SAMPLE_CLOCK_HZ as u64) << 24;
        let denominator = (period as u64 + 1) * output_rate_hz as u64;
        (numerator / denominator).min(u32::MAX as u64) as u32
    }

    pub fn set_increment(&mut self, increment: u32) {
        self.increment = increment;
    }

    pub fn increment(&self) -> u32 {
        self.increment
    }

    /// Rewind to the first table sample
    pub fn reset(&mut self) {
        self.phase = 0;
    }

    /// Advance one output tick
    ///
    /// Returns the table index to output and whether the phase wrapped,
    /// i.e. a complete pass over the table (one block) just finished.
    pub fn advance(&mut self) -> (usize, bool) {
        let (phase, wrapped) = self.phase.overflowing_add(self.increment);
        self.phase = phase;
        ((phase >> 24) as usize, wrapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_increment() {
        assert_eq!(PhaseAccumulator::increment_for(0, 32_000), 0);
        assert_eq!(PhaseAccumulator::increment_for(0x77, 0), 0);
    }

    #[test]
    fn test_one_index_per_tick_at_clock_rate() {
        // Period 0x7F at 250 kHz output: 32 MHz / 128 = 250 kHz of table
        // steps, exactly one index per tick.
        let inc = PhaseAccumulator::increment_for(0x7F, 250_000);
        assert_eq!(inc, 1 << 24);

        let mut acc = PhaseAccumulator::new();
        acc.set_increment(inc);
        for expected in 1..256 {
            assert_eq!(acc.advance(), (expected, false));
        }
        assert_eq!(acc.advance(), (0, true));
    }

    #[test]
    fn test_saturates_on_short_periods() {
        assert_eq!(PhaseAccumulator::increment_for(1, 1), u32::MAX);
    }

    #[test]
    fn test_reset() {
        let mut acc = PhaseAccumulator::new();
        acc.set_increment(1 << 28);
        acc.advance();
        acc.reset();
        acc.set_increment(1 << 24);
        assert_eq!(acc.advance(), (1, false));
    }
}
