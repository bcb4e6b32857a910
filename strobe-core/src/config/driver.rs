//! Driver configurations (DriverConfig)
//!
//! Small enumerated selections, mutated only by a command dispatcher and
//! read by the peripheral driver on its next cycle.

use strobe_hal::InputPair;

use crate::synth::NoteIndex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ADC input pair selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AdcInput {
    /// CdS light sensor pair
    #[default]
    LightSensor,
    /// Auxiliary analog header pair
    Header,
}

impl AdcInput {
    /// Map a command byte to an input selection
    pub fn from_command(byte: u8) -> Option<Self> {
        match byte {
            b'C' => Some(AdcInput::LightSensor),
            b'J' => Some(AdcInput::Header),
            _ => None,
        }
    }
}

/// Mux pins behind each [`AdcInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MuxTable {
    pub light_sensor: InputPair,
    pub header: InputPair,
}

impl MuxTable {
    /// Input pair routed for `input`
    pub fn pair(&self, input: AdcInput) -> InputPair {
        match input {
            AdcInput::LightSensor => self.light_sensor,
            AdcInput::Header => self.header,
        }
    }
}

impl Default for MuxTable {
    fn default() -> Self {
        Self {
            light_sensor: InputPair::new(1, 6),
            header: InputPair::new(4, 5),
        }
    }
}

/// Synthesizer waveform table selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Waveform {
    #[default]
    Sine,
    Triangle,
}

impl Waveform {
    /// The other table
    pub fn toggled(self) -> Self {
        match self {
            Waveform::Sine => Waveform::Triangle,
            Waveform::Triangle => Waveform::Sine,
        }
    }

    /// Sample table streamed to the DAC
    pub fn table(self) -> &'static [u16] {
        match self {
            Waveform::Sine => &crate::synth::SINE_TABLE,
            Waveform::Triangle => &crate::synth::TRIANGLE_TABLE,
        }
    }
}

/// Active synthesizer tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tone {
    /// Sample clock stopped
    #[default]
    Off,
    /// Sample clock running at the note's period
    Note(NoteIndex),
}

impl Tone {
    /// Sample-clock period for this tone (0 = stopped)
    pub fn period(self) -> u16 {
        match self {
            Tone::Off => 0,
            Tone::Note(note) => note.period(),
        }
    }
}

/// Complete synthesizer selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SynthConfig {
    pub waveform: Waveform,
    pub tone: Tone,
}
