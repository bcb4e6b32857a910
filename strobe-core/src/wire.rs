//! Wire encoding of samples
//!
//! The serial stream carries raw samples back to back with no header,
//! delimiter, length or checksum:
//!
//! - ADC: two bytes per sample, big-endian, 12-bit signed result
//!   sign-extended to 16 bits
//! - IMU: six bytes per burst, X-low, X-high, Y-low, Y-high, Z-low, Z-high
//!
//! A host that loses sync has to realign on its own (for example by
//! watching for values out of range).

use heapless::Vec;

/// Largest encoded sample in bytes
pub const MAX_SAMPLE_BYTES: usize = 6;

/// Encoded sample bytes
pub type WireBytes = Vec<u8, MAX_SAMPLE_BYTES>;

/// A sample that can be put on the wire
pub trait WireSample {
    /// Bytes to transmit, in order
    fn encode(&self) -> WireBytes;
}

/// Outputs that produce no samples (the synthesizer) encode to nothing
impl WireSample for () {
    fn encode(&self) -> WireBytes {
        Vec::new()
    }
}

/// Sign-extend a right-adjusted 12-bit two's complement value
pub fn sign_extend_12(raw: u16) -> i16 {
    (((raw & 0x0FFF) << 4) as i16) >> 4
}

/// Signed 12-bit differential ADC result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcSample(pub i16);

impl AdcSample {
    /// ADC reference voltage in millivolts
    pub const VREF_MV: i32 = 2500;

    /// Counts spanning the reference in signed 12-bit mode
    pub const FULL_SCALE: i32 = 2048;

    /// Build from a raw 12-bit result register value
    pub fn from_raw_12bit(raw: u16) -> Self {
        Self(sign_extend_12(raw))
    }

    pub fn raw(self) -> i16 {
        self.0
    }

    /// Differential input voltage in millivolts
    pub fn millivolts(self) -> i32 {
        self.0 as i32 * Self::VREF_MV / Self::FULL_SCALE
    }
}

impl WireSample for AdcSample {
    fn encode(&self) -> WireBytes {
        Vec::from_slice(&self.0.to_be_bytes()).unwrap_or_default()
    }
}

/// Six raw accelerometer output register bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelBurst(pub [u8; 6]);

impl AccelBurst {
    /// Axis values as signed 16-bit counts (x, y, z)
    pub fn axes(&self) -> [i16; 3] {
        let b = &self.0;
        [
            i16::from_le_bytes([b[0], b[1]]),
            i16::from_le_bytes([b[2], b[3]]),
            i16::from_le_bytes([b[4], b[5]]),
        ]
    }
}

impl WireSample for AccelBurst {
    fn encode(&self) -> WireBytes {
        Vec::from_slice(&self.0).unwrap_or_default()
    }
}
