//! Tone synthesizer demo
//!
//! A one-octave keyboard over the serial port:
//!
//! ```text
//!   3 4   6 7 8
//!  W E R T Y U I      s = sine/triangle     Q = play the song
//! ```
//!
//! Each key sounds its note for the hold time and then falls silent.
//! Nothing is sent back.
//!
//! Pins: UART0 TX=GPIO0 RX=GPIO1, audio PWM on GPIO16 (RC low-pass to the
//! amplifier).

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::InterruptExecutor;
use embassy_rp::bind_interrupts;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{self, Pwm};
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use strobe_core::command::SynthDispatcher;
use strobe_core::pipeline::MainLoop;
use strobe_drivers::synth::WaveSynth;
use strobe_firmware::channels::{SHARED, WAVE};
use strobe_firmware::config::DEMO;
use strobe_firmware::tasks::dds::PWM_TOP;
use strobe_firmware::{runner, tasks, UART_BUF_SIZE};
use strobe_hal::uart::UartConfig;
use strobe_hal_rp2040::timer::DeadlineTimer;
use strobe_hal_rp2040::uart::{embassy_config, SerialTx};
use strobe_hal_rp2040::wave::{WaveOut, MID_SCALE};

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

#[entry]
fn main() -> ! {
    info!("Strobe synthesizer starting...");

    let p = embassy_rp::init(Default::default());

    let uart_config = embassy_config(&UartConfig::with_baudrate(DEMO.synth.baudrate));
    let tx_buf = TX_BUF.init([0u8; UART_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; UART_BUF_SIZE]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized at {} baud", DEMO.synth.baudrate);

    let mut pwm_config = pwm::Config::default();
    pwm_config.top = PWM_TOP;
    pwm_config.compare_a = MID_SCALE;
    let pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, pwm_config.clone());

    // Producers run at elevated priority and preempt the main loop
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    spawner.spawn(tasks::uart_rx_task(rx)).unwrap();
    spawner.spawn(tasks::dds_task(pwm, pwm_config)).unwrap();

    let driver = WaveSynth::new(WaveOut::new(&WAVE));
    let dispatcher = SynthDispatcher::from_settings(&DEMO.synth, DeadlineTimer::new());
    info!(
        "Waveform {}, hold policy {}",
        DEMO.synth.initial_waveform, DEMO.synth.hold_policy
    );

    runner::run(MainLoop::new(&SHARED, driver, dispatcher, SerialTx::new(tx)))
}
