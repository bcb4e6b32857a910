//! Serial channel trait

use strobe_hal::UartTx;

/// Byte-oriented blocking transport to the host
///
/// Bytes leave in call order. Only the main loop transmits, so sequences
/// are never interleaved with other output.
pub trait SerialChannel {
    /// Error type for transmit failures
    type Error;

    /// Busy-wait for the transmitter, then latch one byte
    fn send(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Send every byte in order
    fn send_sequence(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &byte in bytes {
            self.send(byte)?;
        }
        Ok(())
    }
}

impl<T: UartTx> SerialChannel for T {
    type Error = T::Error;

    fn send(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write_byte(byte)
    }

    fn send_sequence(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.write_blocking(bytes)
    }
}
