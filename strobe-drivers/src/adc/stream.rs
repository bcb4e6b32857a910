//! Periodic differential ADC stream
//!
//! Conversions are triggered by a hardware timer at a fixed period. The
//! board's conversion-complete interrupt latches the result and raises
//! the sample flag; this driver only selects the input pair, arms the
//! trigger and reads the latched result back.
//!
//! ```ignore
//! let mut adc = AdcStream::from_settings(board_adc, &config.adc);
//! adc.configure(AdcInput::Header)?;
//! adc.start()?;
//!
//! // After the sample flag is observed:
//! let sample = adc.read_latest()?;
//! serial.send_sequence(&sample.encode())?;
//! ```

use strobe_core::config::{AdcInput, AdcSettings, MuxTable};
use strobe_core::traits::PeripheralDriver;
use strobe_core::wire::AdcSample;
use strobe_hal::DifferentialAdc;

/// Differential ADC stream driver
pub struct AdcStream<A> {
    adc: A,
    mux: MuxTable,
    period_ms: u32,
    input: Option<AdcInput>,
}

impl<A: DifferentialAdc> AdcStream<A> {
    pub fn new(adc: A, mux: MuxTable, period_ms: u32) -> Self {
        Self {
            adc,
            mux,
            period_ms,
            input: None,
        }
    }

    pub fn from_settings(adc: A, settings: &AdcSettings) -> Self {
        Self::new(adc, settings.mux_table(), settings.sample_period_ms)
    }

    /// Input currently routed to the converter, once configured
    pub fn input(&self) -> Option<AdcInput> {
        self.input
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}

impl<A: DifferentialAdc> PeripheralDriver for AdcStream<A> {
    type Config = AdcInput;
    type Sample = AdcSample;
    type Error = A::Error;

    fn configure(&mut self, config: AdcInput) -> Result<(), A::Error> {
        self.adc.select(self.mux.pair(config))?;
        self.input = Some(config);
        Ok(())
    }

    fn start(&mut self) -> Result<(), A::Error> {
        self.adc.arm(self.period_ms)
    }

    fn read_latest(&mut self) -> Result<AdcSample, A::Error> {
        self.adc.result().map(AdcSample)
    }
}
