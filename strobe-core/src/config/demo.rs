//! Demo settings
//!
//! Mirrors `demo.toml`. The firmware build script deserializes the file
//! into [`DemoConfig`], validates it and bakes it into the binary as a
//! constant; `Default` reproduces the constants the demos shipped with.

use strobe_hal::InputPair;

use super::driver::{AdcInput, MuxTable, Waveform};
use crate::synth::Timing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest ADC mux pin number accepted
pub const MAX_MUX_PIN: u8 = 15;

/// Highest SPI clock accepted (Hz), the sensor's interface limit
pub const MAX_SPI_FREQUENCY_HZ: u32 = 10_000_000;

/// Errors found while validating a [`DemoConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Baud rate must be non-zero
    ZeroBaudrate,
    /// ADC sample period must be non-zero
    ZeroSamplePeriod,
    /// Mux pin above [`MAX_MUX_PIN`]
    MuxPinOutOfRange,
    /// Positive and negative inputs of one pair are the same pin
    DegenerateInputPair,
    /// SPI clock of zero or above [`MAX_SPI_FREQUENCY_HZ`]
    SpiFrequencyOutOfRange,
    /// A note or song duration is zero
    ZeroDuration,
}

/// How note playback shares the main loop with command handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HoldPolicy {
    /// Busy-wait on the hold timer inside dispatch
    ///
    /// Commands received during playback collapse to the most recent one
    /// and are handled after the last note.
    #[default]
    Blocking,
    /// Advance playback from the loop each time the hold timer elapses
    ///
    /// The loop stays responsive; a new playback command replaces the
    /// one in flight.
    Deferred,
}

/// Serial port settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SerialSettings {
    pub baudrate: u32,
}

impl Default for SerialSettings {
    fn default() -> Self {
        Self { baudrate: 115_200 }
    }
}

/// ADC stream settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdcSettings {
    /// Conversion trigger period in milliseconds
    pub sample_period_ms: u32,
    /// Input pair selected at power-on
    pub initial_input: AdcInput,
    pub light_sensor_pos: u8,
    pub light_sensor_neg: u8,
    pub header_pos: u8,
    pub header_neg: u8,
}

impl AdcSettings {
    /// Mux pins for both inputs
    pub fn mux_table(&self) -> MuxTable {
        MuxTable {
            light_sensor: InputPair::new(self.light_sensor_pos, self.light_sensor_neg),
            header: InputPair::new(self.header_pos, self.header_neg),
        }
    }
}

impl Default for AdcSettings {
    fn default() -> Self {
        let mux = MuxTable::default();
        Self {
            sample_period_ms: 10,
            initial_input: AdcInput::LightSensor,
            light_sensor_pos: mux.light_sensor.positive,
            light_sensor_neg: mux.light_sensor.negative,
            header_pos: mux.header.positive,
            header_neg: mux.header.negative,
        }
    }
}

/// IMU stream settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImuSettings {
    pub spi_frequency_hz: u32,
}

impl Default for ImuSettings {
    fn default() -> Self {
        Self {
            spi_frequency_hz: 8_000_000,
        }
    }
}

/// Synthesizer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SynthSettings {
    /// How long a key press sounds its note
    pub note_hold_ms: u32,
    /// How long each song note sounds
    pub song_note_ms: u32,
    /// Silence after each song note
    pub song_gap_ms: u32,
    /// Silence at the phrase breaks of the song
    pub song_long_gap_ms: u32,
    pub hold_policy: HoldPolicy,
    pub initial_waveform: Waveform,
    /// Serial rate for this demo, overriding `[serial] baudrate`
    pub baudrate: u32,
}

impl SynthSettings {
    /// Playback durations
    pub fn timing(&self) -> Timing {
        Timing {
            note_hold_ms: self.note_hold_ms,
            song_note_ms: self.song_note_ms,
            song_gap_ms: self.song_gap_ms,
            song_long_gap_ms: self.song_long_gap_ms,
        }
    }
}

impl Default for SynthSettings {
    fn default() -> Self {
        Self {
            note_hold_ms: 250,
            song_note_ms: 500,
            song_gap_ms: 125,
            song_long_gap_ms: 250,
            hold_policy: HoldPolicy::Blocking,
            initial_waveform: Waveform::Sine,
            baudrate: 9_600,
        }
    }
}

/// Settings for all three demos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DemoConfig {
    pub serial: SerialSettings,
    pub adc: AdcSettings,
    pub imu: ImuSettings,
    pub synth: SynthSettings,
}

impl DemoConfig {
    /// Check every range the drivers rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.serial.baudrate == 0 || self.synth.baudrate == 0 {
            return Err(ConfigError::ZeroBaudrate);
        }

        if self.adc.sample_period_ms == 0 {
            return Err(ConfigError::ZeroSamplePeriod);
        }
        let mux = self.adc.mux_table();
        for pair in [mux.light_sensor, mux.header] {
            if pair.positive > MAX_MUX_PIN || pair.negative > MAX_MUX_PIN {
                return Err(ConfigError::MuxPinOutOfRange);
            }
            if pair.positive == pair.negative {
                return Err(ConfigError::DegenerateInputPair);
            }
        }

        if self.imu.spi_frequency_hz == 0 || self.imu.spi_frequency_hz > MAX_SPI_FREQUENCY_HZ {
            return Err(ConfigError::SpiFrequencyOutOfRange);
        }

        let synth = &self.synth;
        if synth.note_hold_ms == 0
            || synth.song_note_ms == 0
            || synth.song_gap_ms == 0
            || synth.song_long_gap_ms == 0
        {
            return Err(ConfigError::ZeroDuration);
        }

        Ok(())
    }
}
