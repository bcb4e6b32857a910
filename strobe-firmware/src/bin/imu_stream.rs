//! IMU stream demo
//!
//! Sends the six raw accelerometer output bytes of the LSM6DS3 every time
//! it signals data ready. Received bytes are ignored.
//!
//! Pins: UART0 TX=GPIO0 RX=GPIO1, SPI0 SCK=GPIO18 MOSI=GPIO19 MISO=GPIO16,
//! CS=GPIO17, INT1=GPIO20.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::InterruptExecutor;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::UART0;
use embassy_rp::spi::Spi;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use strobe_core::command::NoCommands;
use strobe_core::pipeline::MainLoop;
use strobe_drivers::imu::{lsm6ds3, AccelConfig, Lsm6ds3};
use strobe_firmware::channels::SHARED;
use strobe_firmware::config::DEMO;
use strobe_firmware::{runner, tasks, UART_BUF_SIZE};
use strobe_hal::uart::UartConfig;
use strobe_hal_rp2040::gpio::Gpio;
use strobe_hal_rp2040::spi::{self as board_spi, EhSpi};
use strobe_hal_rp2040::uart::{embassy_config, SerialTx};

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
    info!("Strobe IMU stream starting...");

    let p = embassy_rp::init(Default::default());

    let uart_config = embassy_config(&UartConfig::with_baudrate(DEMO.serial.baudrate));
    let tx_buf = TX_BUF.init([0u8; UART_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; UART_BUF_SIZE]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized at {} baud", DEMO.serial.baudrate);

    let spi_config = board_spi::embassy_config(&lsm6ds3::spi_config(DEMO.imu.spi_frequency_hz));
    let spi = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, spi_config);
    let cs = Output::new(p.PIN_17, Level::High);
    let int1 = Input::new(p.PIN_20, Pull::Down);
    info!("SPI initialized at {} Hz, mode 3", DEMO.imu.spi_frequency_hz);

    // Producers run at elevated priority and preempt the main loop
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    spawner.spawn(tasks::uart_rx_task(rx)).unwrap();
    spawner.spawn(tasks::imu_ready_task(int1)).unwrap();

    let accel = AccelConfig::default();
    let driver = Lsm6ds3::new(EhSpi::new(spi), Gpio::new(cs), accel);
    info!("Accelerometer: {}", accel);

    runner::run(MainLoop::new(
        &SHARED,
        driver,
        NoCommands::new(accel),
        SerialTx::new(tx),
    ))
}
