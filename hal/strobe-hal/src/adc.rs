//! Differential ADC abstraction
//!
//! Models a single ADC channel in signed differential mode whose
//! conversions are started by a periodic hardware trigger (a timer
//! overflow routed through the event system). The completion interrupt
//! belongs to the board; it copies the result and raises the pipeline's
//! sample flag.

/// Positive/negative mux selection for a differential conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputPair {
    /// Pin routed to the positive input
    pub positive: u8,
    /// Pin routed to the negative input
    pub negative: u8,
}

impl InputPair {
    pub const fn new(positive: u8, negative: u8) -> Self {
        Self { positive, negative }
    }
}

/// Timer-triggered differential ADC
pub trait DifferentialAdc {
    /// Error type for ADC operations
    type Error;

    /// Route a new input pair to the converter
    ///
    /// A conversion already in flight finishes on the old pair.
    fn select(&mut self, pair: InputPair) -> Result<(), Self::Error>;

    /// Start periodic conversions, one every `period_ms` milliseconds
    fn arm(&mut self, period_ms: u32) -> Result<(), Self::Error>;

    /// Most recent conversion result, 12-bit signed, right adjusted
    fn result(&mut self) -> Result<i16, Self::Error>;
}
