//! SPI bus adapter
//!
//! Wraps any `embedded-hal` 1.0 bus, which covers embassy-rp's blocking
//! `Spi`. Chip select is driven separately by the sensor driver.

use embassy_rp::spi;
use embedded_hal::spi::SpiBus as EhSpiBus;
use strobe_hal::spi::{Phase, Polarity, SpiConfig};
use strobe_hal::SpiBus;

/// Translate a [`SpiConfig`] into the embassy-rp configuration
pub fn embassy_config(config: &SpiConfig) -> spi::Config {
    let mut out = spi::Config::default();
    out.frequency = config.frequency;
    out.polarity = match config.polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    out.phase = match config.phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    out
}

/// [`SpiBus`] over an `embedded-hal` bus
pub struct EhSpi<B> {
    bus: B,
}

impl<B: EhSpiBus<u8>> EhSpi<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }
}

impl<B: EhSpiBus<u8>> SpiBus for EhSpi<B> {
    type Error = B::Error;

    /// Returns once the last bit is on the wire
    fn write(&mut self, data: &[u8]) -> Result<(), B::Error> {
        self.bus.write(data)?;
        self.bus.flush()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), B::Error> {
        self.bus.read(buf)
    }

    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), B::Error> {
        self.bus.transfer_in_place(data)
    }
}
