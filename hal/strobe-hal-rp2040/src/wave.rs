//! Waveform output without a DAC
//!
//! A producer task on the interrupt executor ticks at a fixed output rate
//! and writes the current table sample to a PWM compare register; the RC
//! filtered pin acts as the DAC. [`DdsGenerator`] stands in for the
//! sample clock, [`WaveState`] for the DMA channel registers.

use core::cell::Cell;
use core::convert::Infallible;

use critical_section::Mutex;
use portable_atomic::{AtomicBool, AtomicU16, Ordering};
use strobe_core::signal::EventFlag;
use strobe_core::synth::PhaseAccumulator;
use strobe_hal::WaveformStream;

/// DAC code output while silent
pub const MID_SCALE: u16 = 0x800;

/// Stream registers shared between the main loop and the generator
pub struct WaveState {
    table: Mutex<Cell<&'static [u16]>>,
    period: AtomicU16,
    reload: AtomicBool,
    block_done: EventFlag,
}

impl WaveState {
    pub const fn new() -> Self {
        Self {
            table: Mutex::new(Cell::new(&[])),
            period: AtomicU16::new(0),
            reload: AtomicBool::new(false),
            block_done: EventFlag::new(),
        }
    }

    fn table(&self) -> &'static [u16] {
        critical_section::with(|cs| self.table.borrow(cs).get())
    }
}

impl Default for WaveState {
    fn default() -> Self {
        Self::new()
    }
}

/// [`WaveformStream`] handle over a [`WaveState`]
pub struct WaveOut<'a> {
    state: &'a WaveState,
}

impl<'a> WaveOut<'a> {
    pub fn new(state: &'a WaveState) -> Self {
        Self { state }
    }
}

impl WaveformStream for WaveOut<'_> {
    type Error = Infallible;

    fn load_table(&mut self, table: &'static [u16]) -> Result<(), Infallible> {
        critical_section::with(|cs| self.state.table.borrow(cs).set(table));
        self.state.reload.store(true, Ordering::Release);
        Ok(())
    }

    fn set_sample_period(&mut self, period: u16) -> Result<(), Infallible> {
        self.state.period.store(period, Ordering::Release);
        Ok(())
    }

    fn block_complete(&mut self) -> bool {
        self.state.period.load(Ordering::Acquire) == 0 || self.state.block_done.test_and_clear()
    }
}

/// Software sample clock
pub struct DdsGenerator {
    accumulator: PhaseAccumulator,
    period: u16,
    output_rate_hz: u32,
}

impl DdsGenerator {
    pub const fn new(output_rate_hz: u32) -> Self {
        Self {
            accumulator: PhaseAccumulator::new(),
            period: 0,
            output_rate_hz,
        }
    }

    /// Next DAC code, or `None` while silent
    ///
    /// Raises the block-done flag each time a full pass over the table
    /// completes.
    pub fn next_sample(&mut self, state: &WaveState) -> Option<u16> {
        if state.reload.swap(false, Ordering::AcqRel) {
            self.accumulator.reset();
        }

        let period = state.period.load(Ordering::Acquire);
        if period == 0 {
            self.period = 0;
            return None;
        }
        if period != self.period {
            self.period = period;
            self.accumulator
                .set_increment(PhaseAccumulator::increment_for(period, self.output_rate_hz));
        }

        let table = state.table();
        if table.is_empty() {
            return None;
        }

        let (index, wrapped) = self.accumulator.advance();
        if wrapped {
            state.block_done.raise();
        }
        table.get(index % table.len()).copied()
    }
}
