//! Board-agnostic core of the sampling and streaming demos
//!
//! Every demo is the same small pipeline:
//!
//! ```text
//!  interrupt context            main loop                     host
//! ┌──────────────────┐   flag   ┌───────────────────┐  bytes  ┌──────┐
//! │ sample complete  │ ───────▶ │ read_latest()     │ ──────▶ │      │
//! │ byte received    │ ───────▶ │ dispatch(command) │         │      │
//! └──────────────────┘ mailbox  └───────────────────┘         └──────┘
//! ```
//!
//! This crate contains everything in that picture that does not touch a
//! register:
//!
//! - Interrupt-to-main-loop handoff primitives ([`signal`])
//! - Peripheral driver and serial channel traits ([`traits`])
//! - Driver configuration and demo settings ([`config`])
//! - Command byte dispatch ([`command`])
//! - Wire encoding of samples ([`wire`])
//! - The main loop itself ([`pipeline`])
//! - Synthesizer tables and note sequencing ([`synth`])

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod pipeline;
pub mod signal;
pub mod synth;
pub mod traits;
pub mod wire;
