//! Differential ADC emulation
//!
//! The RP2040 ADC is single-ended, 12-bit unsigned, with four external
//! channels (ADC0-ADC3 on GPIO26-29). A "mux pin" here is a channel
//! number; a differential conversion reads both channels back to back and
//! halves their difference into the signed 12-bit range.
//!
//! ```text
//!  main loop                     interrupt executor
//! ┌─────────────┐  select/arm   ┌──────────────┐  convert()  ┌─────┐
//! │  BoardAdc   │ ────────────▶ │  AdcControl  │ ◀────────── │ ADC │
//! │             │ ◀──────────── │  (static)    │  complete() │     │
//! └─────────────┘    result     └──────────────┘             └─────┘
//! ```

use core::convert::Infallible;

use embassy_rp::adc::{self, Adc, Async, Channel};
use portable_atomic::{AtomicBool, AtomicU32, Ordering};
use strobe_core::signal::SampleSlot;
use strobe_hal::{DifferentialAdc, InputPair};

/// External ADC channels
pub const CHANNEL_COUNT: usize = 4;

/// Selection and result shared between the main loop and the sampler
///
/// The pair is stored as one value so the sampler never converts a
/// positive pin from one selection against the negative pin of another.
pub struct AdcControl {
    selection: SampleSlot<InputPair>,
    period_ms: AtomicU32,
    armed: AtomicBool,
    result: SampleSlot<i16>,
}

impl AdcControl {
    pub const fn new() -> Self {
        Self {
            selection: SampleSlot::new(InputPair::new(0, 1)),
            period_ms: AtomicU32::new(0),
            armed: AtomicBool::new(false),
            result: SampleSlot::new(0),
        }
    }

    /// Pair to convert next
    pub fn selection(&self) -> InputPair {
        self.selection.load()
    }

    /// Trigger period, once armed
    pub fn period_ms(&self) -> Option<u32> {
        self.armed
            .load(Ordering::Acquire)
            .then(|| self.period_ms.load(Ordering::Acquire))
    }

    /// Latch a finished conversion (sampler side)
    pub fn complete(&self, result: i16) {
        self.result.store(result);
    }
}

impl Default for AdcControl {
    fn default() -> Self {
        Self::new()
    }
}

/// [`DifferentialAdc`] handle over an [`AdcControl`]
pub struct BoardAdc<'a> {
    control: &'a AdcControl,
}

impl<'a> BoardAdc<'a> {
    pub fn new(control: &'a AdcControl) -> Self {
        Self { control }
    }
}

impl DifferentialAdc for BoardAdc<'_> {
    type Error = Infallible;

    fn select(&mut self, pair: InputPair) -> Result<(), Infallible> {
        self.control.selection.store(pair);
        Ok(())
    }

    fn arm(&mut self, period_ms: u32) -> Result<(), Infallible> {
        self.control.period_ms.store(period_ms, Ordering::Release);
        self.control.armed.store(true, Ordering::Release);
        Ok(())
    }

    fn result(&mut self) -> Result<i16, Infallible> {
        Ok(self.control.result.load())
    }
}

/// Signed 12-bit difference of two unsigned 12-bit readings
pub fn differential(positive: u16, negative: u16) -> i16 {
    let diff = (positive as i32 - negative as i32) / 2;
    diff.clamp(-2048, 2047) as i16
}

/// Conversion errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConvertError {
    /// ADC reported a failed conversion
    Adc,
    /// Mux pin is not one of the external channels
    NoSuchChannel(u8),
}

impl From<adc::Error> for ConvertError {
    fn from(_: adc::Error) -> Self {
        ConvertError::Adc
    }
}

/// Run one differential conversion on `pair`
pub async fn convert(
    adc: &mut Adc<'_, Async>,
    channels: &mut [Channel<'_>; CHANNEL_COUNT],
    pair: InputPair,
) -> Result<i16, ConvertError> {
    for pin in [pair.positive, pair.negative] {
        if pin as usize >= CHANNEL_COUNT {
            return Err(ConvertError::NoSuchChannel(pin));
        }
    }
    let positive = adc.read(&mut channels[pair.positive as usize]).await?;
    let negative = adc.read(&mut channels[pair.negative as usize]).await?;
    Ok(differential(positive, negative))
}
