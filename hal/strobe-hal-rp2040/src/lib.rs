//! RP2040 board layer for the Strobe demos
//!
//! Implements the `strobe-hal` traits on embassy-rp:
//!
//! - UART transmit over the buffered UART ([`uart::SerialTx`])
//! - SPI bus over any `embedded-hal` bus ([`spi::EhSpi`])
//! - Chip-select output ([`gpio::Gpio`])
//! - Differential ADC emulated on two single-ended channels ([`adc`])
//! - Countdown timer on the embassy time driver ([`timer::DeadlineTimer`])
//! - PWM waveform output fed by a phase accumulator ([`wave`])
//!
//! The RP2040 has neither a differential ADC nor a DAC. The ADC and wave
//! modules split each peripheral into a trait-facing handle used by the
//! main loop and a `static` state block serviced by a producer task on the
//! interrupt executor.

#![no_std]

pub mod adc;
pub mod gpio;
pub mod spi;
pub mod timer;
pub mod uart;
pub mod wave;
