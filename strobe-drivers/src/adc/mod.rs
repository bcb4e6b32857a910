//! ADC stream drivers

pub mod stream;

pub use stream::AdcStream;
