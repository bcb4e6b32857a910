//! LSM6DS3 accelerometer (SPI mode)
//!
//! The LSM6DS3 is a 6-axis IMU; only the accelerometer is used. It raises
//! INT1 when a new XYZ sample is ready, and the board's edge interrupt on
//! that line raises the pipeline's sample flag.
//!
//! # SPI Protocol
//!
//! Mode 3 (clock idles high, data captured on the second edge), MSB first,
//! chip select active low, up to 10 MHz:
//! - Write: `[addr, value]` with bit 7 of `addr` clear
//! - Read: `[addr | 0x80]`, then one byte clocked back
//!
//! Every register access is its own chip-select frame. The six output
//! registers are read one at a time, X-low first.

use strobe_core::traits::PeripheralDriver;
use strobe_core::wire::AccelBurst;
use strobe_hal::spi::{Mode, SpiConfig};
use strobe_hal::{OutputPin, SpiBus};

/// LSM6DS3 register addresses
pub mod reg {
    /// Interrupt 1 routing
    pub const INT1_CTRL: u8 = 0x0D;
    /// Identity register
    pub const WHO_AM_I: u8 = 0x0F;
    /// Accelerometer data rate and full scale
    pub const CTRL1_XL: u8 = 0x10;
    /// Interface and reset control
    pub const CTRL3_C: u8 = 0x12;
    /// Accelerometer axis enables
    pub const CTRL9_XL: u8 = 0x18;
    pub const OUTX_L_XL: u8 = 0x28;
    pub const OUTX_H_XL: u8 = 0x29;
    pub const OUTY_L_XL: u8 = 0x2A;
    pub const OUTY_H_XL: u8 = 0x2B;
    pub const OUTZ_L_XL: u8 = 0x2C;
    pub const OUTZ_H_XL: u8 = 0x2D;
}

/// Set on the address byte of a read access
pub const READ_STROBE: u8 = 0x80;

/// `WHO_AM_I` contents of the LSM6DS3
pub const WHO_AM_I_VALUE: u8 = 0x69;

/// `WHO_AM_I` contents of the LSM6DS3TR-C, register compatible for
/// everything `init` writes
pub const WHO_AM_I_VALUE_TR_C: u8 = 0x6A;

/// Identities accepted by [`Lsm6ds3::init`]
pub const ACCEPTED_IDENTITIES: [u8; 2] = [WHO_AM_I_VALUE, WHO_AM_I_VALUE_TR_C];

/// CTRL3_C: software reset
const SW_RESET: u8 = 1 << 0;
/// CTRL3_C: register address auto-increment
const IF_INC: u8 = 1 << 2;
/// CTRL9_XL: X, Y and Z axis enables
const XYZ_EN: u8 = 0b0011_1000;
/// INT1_CTRL: accelerometer data ready on INT1
const INT1_DRDY_XL: u8 = 1 << 0;

/// SPI mode required by the sensor
pub const SPI_MODE: Mode = Mode::Mode3;

/// Bus configuration for the sensor at the given clock
pub fn spi_config(frequency_hz: u32) -> SpiConfig {
    SpiConfig::new(frequency_hz, SPI_MODE)
}

/// Accelerometer full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FullScale {
    #[default]
    G2,
    G4,
    G8,
    G16,
}

impl FullScale {
    /// FS_XL field value
    fn bits(self) -> u8 {
        match self {
            FullScale::G2 => 0b00,
            FullScale::G16 => 0b01,
            FullScale::G4 => 0b10,
            FullScale::G8 => 0b11,
        }
    }

    /// Sensitivity in micro-g per LSB
    pub fn micro_g_per_lsb(self) -> i32 {
        match self {
            FullScale::G2 => 61,
            FullScale::G4 => 122,
            FullScale::G8 => 244,
            FullScale::G16 => 488,
        }
    }

    /// Convert a raw axis count to milli-g
    pub fn to_milli_g(self, raw: i16) -> i32 {
        raw as i32 * self.micro_g_per_lsb() / 1000
    }
}

/// Accelerometer output data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    PowerDown,
    Hz12_5,
    Hz26,
    Hz52,
    Hz104,
    #[default]
    Hz208,
    Hz416,
    Hz833,
    Hz1660,
    Hz3330,
    Hz6660,
}

impl DataRate {
    /// ODR_XL field value
    fn bits(self) -> u8 {
        match self {
            DataRate::PowerDown => 0b0000,
            DataRate::Hz12_5 => 0b0001,
            DataRate::Hz26 => 0b0010,
            DataRate::Hz52 => 0b0011,
            DataRate::Hz104 => 0b0100,
            DataRate::Hz208 => 0b0101,
            DataRate::Hz416 => 0b0110,
            DataRate::Hz833 => 0b0111,
            DataRate::Hz1660 => 0b1000,
            DataRate::Hz3330 => 0b1001,
            DataRate::Hz6660 => 0b1010,
        }
    }
}

/// Accelerometer configuration (±2 g at 208 Hz by default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    pub full_scale: FullScale,
    pub data_rate: DataRate,
}

impl AccelConfig {
    /// CTRL1_XL register value
    pub fn ctrl1_xl(&self) -> u8 {
        (self.data_rate.bits() << 4) | (self.full_scale.bits() << 2)
    }
}

/// LSM6DS3 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImuError<E> {
    /// SPI bus error
    Spi(E),
    /// `WHO_AM_I` is none of [`ACCEPTED_IDENTITIES`]
    WrongIdentity(u8),
}

/// LSM6DS3 driver
pub struct Lsm6ds3<SPI, CS> {
    spi: SPI,
    cs: CS,
    config: AccelConfig,
    started: bool,
}

impl<SPI: SpiBus, CS: OutputPin> Lsm6ds3<SPI, CS> {
    /// Create the driver with chip select deasserted
    pub fn new(spi: SPI, mut cs: CS, config: AccelConfig) -> Self {
        cs.set_high();
        Self {
            spi,
            cs,
            config,
            started: false,
        }
    }

    pub fn config(&self) -> AccelConfig {
        self.config
    }

    /// Run one chip-select frame
    ///
    /// Chip select is released even when the bus fails mid-frame.
    fn transaction<R>(
        &mut self,
        op: impl FnOnce(&mut SPI) -> Result<R, SPI::Error>,
    ) -> Result<R, ImuError<SPI::Error>> {
        self.cs.set_low();
        let result = op(&mut self.spi);
        self.cs.set_high();
        result.map_err(ImuError::Spi)
    }

    /// Read a single register
    pub fn read_register(&mut self, addr: u8) -> Result<u8, ImuError<SPI::Error>> {
        self.transaction(|spi| {
            spi.write(&[addr | READ_STROBE])?;
            let mut value = [0u8];
            spi.read(&mut value)?;
            Ok(value[0])
        })
    }

    /// Write a single register
    pub fn write_register(&mut self, addr: u8, value: u8) -> Result<(), ImuError<SPI::Error>> {
        self.transaction(|spi| spi.write(&[addr & !READ_STROBE, value]))
    }

    pub fn who_am_i(&mut self) -> Result<u8, ImuError<SPI::Error>> {
        self.read_register(reg::WHO_AM_I)
    }

    /// Check identity, reset, and enable data-ready on INT1
    pub fn init(&mut self) -> Result<(), ImuError<SPI::Error>> {
        let id = self.who_am_i()?;
        if !ACCEPTED_IDENTITIES.contains(&id) {
            return Err(ImuError::WrongIdentity(id));
        }

        self.write_register(reg::CTRL3_C, IF_INC | SW_RESET)?;
        self.write_register(reg::CTRL9_XL, XYZ_EN)?;
        self.write_register(reg::CTRL1_XL, self.config.ctrl1_xl())?;
        self.write_register(reg::INT1_CTRL, INT1_DRDY_XL)
    }

    /// Read the six output registers, X-low first
    pub fn read_burst(&mut self) -> Result<AccelBurst, ImuError<SPI::Error>> {
        let mut burst = [0u8; 6];
        for (byte, addr) in burst.iter_mut().zip(reg::OUTX_L_XL..=reg::OUTZ_H_XL) {
            *byte = self.read_register(addr)?;
        }
        Ok(AccelBurst(burst))
    }

    /// Axis values of a burst in milli-g under the current full scale
    pub fn milli_g(&self, burst: &AccelBurst) -> [i32; 3] {
        burst.axes().map(|raw| self.config.full_scale.to_milli_g(raw))
    }

    /// Give back the bus and chip select
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI: SpiBus, CS: OutputPin> PeripheralDriver for Lsm6ds3<SPI, CS> {
    type Config = AccelConfig;
    type Sample = AccelBurst;
    type Error = ImuError<SPI::Error>;

    /// Store the configuration; once running, also rewrite CTRL1_XL
    fn configure(&mut self, config: AccelConfig) -> Result<(), Self::Error> {
        self.config = config;
        if self.started {
            self.write_register(reg::CTRL1_XL, config.ctrl1_xl())?;
        }
        Ok(())
    }

    fn start(&mut self) -> Result<(), Self::Error> {
        self.init()?;
        self.started = true;
        Ok(())
    }

    fn read_latest(&mut self) -> Result<AccelBurst, Self::Error> {
        self.read_burst()
    }
}
