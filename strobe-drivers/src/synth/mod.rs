//! Waveform synthesizer drivers

pub mod wave;

pub use wave::WaveSynth;
