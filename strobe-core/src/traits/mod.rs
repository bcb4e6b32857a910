//! Pipeline abstraction traits
//!
//! These traits define the interface between the main loop and the
//! hardware-specific drivers.

pub mod driver;
pub mod serial;

pub use driver::PeripheralDriver;
pub use serial::SerialChannel;
