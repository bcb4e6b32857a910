//! Strobe Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs. The sampling pipeline and the peripheral drivers
//! are written against these traits only, so the same demo logic runs on
//! any board that provides them (and against mocks on the host).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Firmware (strobe-firmware binaries)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  strobe-core / strobe-drivers           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  strobe-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  strobe-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (chip select)
//! - [`uart::UartTx`] - Serial transmit
//! - [`spi::SpiBus`] - SPI bus operations
//! - [`adc::DifferentialAdc`] - Timer-triggered differential ADC
//! - [`timer::CountdownTimer`] - One-shot countdown for timed holds
//! - [`wave::WaveformStream`] - Table-driven DAC output

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod spi;
pub mod timer;
pub mod uart;
pub mod wave;

// Re-export key traits at crate root for convenience
pub use adc::{DifferentialAdc, InputPair};
pub use gpio::OutputPin;
pub use spi::SpiBus;
pub use timer::CountdownTimer;
pub use uart::UartTx;
pub use wave::WaveformStream;
