//! Peripheral driver implementations
//!
//! Concrete [`strobe_core::traits::PeripheralDriver`]s for the three demos,
//! written against the `strobe-hal` traits:
//!
//! - Differential ADC stream ([`adc::AdcStream`])
//! - LSM6DS3 accelerometer over SPI ([`imu::Lsm6ds3`])
//! - Table-driven waveform synthesizer ([`synth::WaveSynth`])

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod adc;
pub mod imu;
pub mod synth;
