//! ADC stream demo
//!
//! Converts the selected differential pair every sample period and sends
//! each result as two big-endian bytes. `C` selects the light sensor
//! pair, `J` the header pair.
//!
//! Pins: UART0 TX=GPIO0 RX=GPIO1, ADC0-ADC3 on GPIO26-29.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::InterruptExecutor;
use embassy_rp::adc::{self, Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use strobe_core::command::InputSelect;
use strobe_core::pipeline::MainLoop;
use strobe_drivers::adc::AdcStream;
use strobe_firmware::channels::{ADC, SHARED};
use strobe_firmware::config::DEMO;
use strobe_firmware::{runner, tasks, UART_BUF_SIZE};
use strobe_hal::uart::UartConfig;
use strobe_hal_rp2040::adc::BoardAdc;
use strobe_hal_rp2040::uart::{embassy_config, SerialTx};

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
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
    info!("Strobe ADC stream starting...");

    let p = embassy_rp::init(Default::default());

    let uart_config = embassy_config(&UartConfig::with_baudrate(DEMO.serial.baudrate));
    let tx_buf = TX_BUF.init([0u8; UART_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; UART_BUF_SIZE]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized at {} baud", DEMO.serial.baudrate);

    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let channels = [
        Channel::new_pin(p.PIN_26, Pull::None),
        Channel::new_pin(p.PIN_27, Pull::None),
        Channel::new_pin(p.PIN_28, Pull::None),
        Channel::new_pin(p.PIN_29, Pull::None),
    ];

    // Producers run at elevated priority and preempt the main loop
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    spawner.spawn(tasks::uart_rx_task(rx)).unwrap();
    spawner.spawn(tasks::adc_sampler_task(adc, channels)).unwrap();

    let driver = AdcStream::from_settings(BoardAdc::new(&ADC), &DEMO.adc);
    let dispatcher = InputSelect::new(DEMO.adc.initial_input);
    info!(
        "Sampling {} every {} ms",
        DEMO.adc.initial_input, DEMO.adc.sample_period_ms
    );

    runner::run(MainLoop::new(&SHARED, driver, dispatcher, SerialTx::new(tx)))
}
