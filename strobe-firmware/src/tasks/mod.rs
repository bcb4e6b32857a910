//! Producer tasks
//!
//! All of these run on the interrupt executor, so they preempt the
//! thread-mode main loop exactly like interrupt handlers.

pub mod adc_sampler;
pub mod dds;
pub mod imu_ready;
pub mod uart_rx;

pub use adc_sampler::adc_sampler_task;
pub use dds::{dds_task, DDS_OUTPUT_RATE_HZ};
pub use imu_ready::imu_ready_task;
pub use uart_rx::uart_rx_task;
