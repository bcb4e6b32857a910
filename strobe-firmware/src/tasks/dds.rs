//! Tone generator task
//!
//! Plays the role of the DAC sample clock and DMA channel: at a fixed
//! output rate, writes the current table sample into the PWM compare
//! register. Silence parks the output at mid-scale.

use defmt::*;
use embassy_rp::pwm::{self, Pwm};
use embassy_time::{Duration, Ticker};

use strobe_hal_rp2040::wave::{DdsGenerator, MID_SCALE};

use crate::channels::WAVE;

/// Generator ticks per second
pub const DDS_OUTPUT_RATE_HZ: u32 = 16_000;

/// PWM counter wrap for 12-bit samples
pub const PWM_TOP: u16 = 0x0FFF;

#[embassy_executor::task]
pub async fn dds_task(mut pwm: Pwm<'static>, mut config: pwm::Config) {
    info!("DDS task started at {} Hz", DDS_OUTPUT_RATE_HZ);

    let mut generator = DdsGenerator::new(DDS_OUTPUT_RATE_HZ);
    let mut ticker = Ticker::every(Duration::from_hz(DDS_OUTPUT_RATE_HZ.into()));

    loop {
        ticker.next().await;

        let code = generator.next_sample(&WAVE).unwrap_or(MID_SCALE);
        if code != config.compare_a {
            config.compare_a = code;
            pwm.set_config(&config);
        }
    }
}
