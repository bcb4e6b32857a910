//! GPIO outputs

use embassy_rp::gpio::Output;
use strobe_hal::OutputPin;

/// Push-pull output (SPI chip select)
pub struct Gpio<'d> {
    pin: Output<'d>,
}

impl<'d> Gpio<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for Gpio<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
