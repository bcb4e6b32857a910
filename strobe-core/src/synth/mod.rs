//! Synthesizer data and note sequencing
//!
//! The synthesizer streams one of two fixed tables into the DAC, one
//! sample per sample-clock tick. Pitch is set entirely by the sample-clock
//! period; this module holds the tables, the key map, the song, and the
//! sequencer that turns a playback command into timed steps.

pub mod dds;
pub mod notes;
pub mod sequence;
pub mod tables;

pub use dds::PhaseAccumulator;
pub use notes::{tone_frequency_millihz, NoteIndex, NOTE_KEYS, NOTE_PERIODS, SAMPLE_CLOCK_HZ, SONG};
pub use sequence::{Melody, Sequencer, Step, Timing};
pub use tables::{SINE_TABLE, TABLE_LEN, TRIANGLE_TABLE};
