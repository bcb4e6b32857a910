//! Strobe - interrupt-driven sampling and streaming demos
//!
//! Shared firmware pieces for the three RP2040 binaries:
//!
//! - `adc-stream`: differential ADC samples every 10 ms, two bytes each
//! - `imu-stream`: LSM6DS3 accelerometer bursts on data-ready, six bytes each
//! - `synth`: keyboard-driven tone synthesizer, no outbound traffic
//!
//! Producers (UART receive, ADC sampler, data-ready edge, tone generator)
//! run as tasks on an interrupt executor and only touch the statics in
//! [`channels`]. The thread-mode main loop drains them.

#![no_std]

pub mod channels;
pub mod config;
pub mod runner;
pub mod tasks;

/// Capacity of each UART ring buffer
pub const UART_BUF_SIZE: usize = 64;
