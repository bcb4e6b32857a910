//! Build-time demo settings
//!
//! Generated by `build.rs` from `demo.toml`, which is validated there;
//! a bad file fails the build rather than the boot.

use strobe_core::config::{
    AdcInput, AdcSettings, DemoConfig, HoldPolicy, ImuSettings, SerialSettings, SynthSettings,
    Waveform,
};

include!(concat!(env!("OUT_DIR"), "/demo_config.rs"));
