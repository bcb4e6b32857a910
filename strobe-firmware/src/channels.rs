//! State shared between producer tasks and the main loop
//!
//! Every producer runs on the interrupt executor; the main loop is the
//! only consumer.

use strobe_core::pipeline::Shared;
use strobe_hal_rp2040::adc::AdcControl;
use strobe_hal_rp2040::wave::WaveState;

/// Pending command byte and sample-ready flag
pub static SHARED: Shared = Shared::new();

/// ADC selection, trigger period and latched result
pub static ADC: AdcControl = AdcControl::new();

/// Waveform table and sample-clock period
pub static WAVE: WaveState = WaveState::new();
