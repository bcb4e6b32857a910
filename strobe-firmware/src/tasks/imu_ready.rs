//! LSM6DS3 data-ready task
//!
//! INT1 rises once per accelerometer sample; each edge raises the sample
//! flag. The burst itself is read over SPI by the main loop.

use defmt::*;
use embassy_rp::gpio::Input;

use crate::channels::SHARED;

#[embassy_executor::task]
pub async fn imu_ready_task(mut int1: Input<'static>) {
    info!("IMU data-ready task started");

    loop {
        int1.wait_for_rising_edge().await;
        SHARED.on_sample_ready();
    }
}
