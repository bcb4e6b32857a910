//! ADC conversion task
//!
//! Stands in for the timer-triggered conversion and its completion
//! interrupt: idles until the driver arms the ADC, then converts the
//! selected pair once per period, latches the result and raises the
//! sample flag.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_time::{Duration, Ticker, Timer};

use strobe_hal_rp2040::adc::{convert, CHANNEL_COUNT};

use crate::channels::{ADC, SHARED};

/// Poll interval while waiting to be armed
const ARM_POLL_MS: u64 = 1;

#[embassy_executor::task]
pub async fn adc_sampler_task(
    mut adc: Adc<'static, Async>,
    mut channels: [Channel<'static>; CHANNEL_COUNT],
) {
    info!("ADC sampler task started");

    let period_ms = loop {
        if let Some(period_ms) = ADC.period_ms() {
            break period_ms;
        }
        Timer::after_millis(ARM_POLL_MS).await;
    };
    info!("ADC armed: {} ms period", period_ms);

    let mut ticker = Ticker::every(Duration::from_millis(period_ms.into()));

    loop {
        ticker.next().await;

        match convert(&mut adc, &mut channels, ADC.selection()).await {
            Ok(result) => {
                ADC.complete(result);
                SHARED.on_sample_ready();
            }
            Err(e) => {
                warn!("ADC conversion failed: {}", e);
            }
        }
    }
}
