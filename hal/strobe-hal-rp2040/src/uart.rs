//! UART transmit
//!
//! The receive half of the buffered UART stays with the firmware's
//! receive task, which posts each byte to the command mailbox.

use embassy_rp::uart::{self, BufferedUartTx};
use strobe_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use strobe_hal::UartTx;

/// Translate a [`UartConfig`] into the embassy-rp configuration
pub fn embassy_config(config: &UartConfig) -> uart::Config {
    let mut out = uart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    out.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    out
}

/// Blocking transmitter over the buffered UART's transmit half
pub struct SerialTx {
    tx: BufferedUartTx,
}

impl SerialTx {
    pub fn new(tx: BufferedUartTx) -> Self {
        Self { tx }
    }
}

impl UartTx for SerialTx {
    type Error = uart::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), uart::Error> {
        self.write_blocking(&[byte])
    }

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), uart::Error> {
        let mut pending = data;
        while !pending.is_empty() {
            let written = self.tx.blocking_write(pending)?;
            pending = &pending[written..];
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), uart::Error> {
        self.tx.blocking_flush()
    }
}
