//! Serial receive task
//!
//! Posts every received byte to the command mailbox. Bytes arriving
//! faster than the main loop consumes them overwrite each other.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use crate::channels::SHARED;
use crate::UART_BUF_SIZE;

#[embassy_executor::task]
pub async fn uart_rx_task(mut rx: BufferedUartRx) {
    info!("UART RX task started");

    let mut buf = [0u8; UART_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) => {
                for &byte in &buf[..n] {
                    trace!("RX: {=u8:#x}", byte);
                    SHARED.on_byte_received(byte);
                }
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
