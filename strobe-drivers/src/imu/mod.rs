//! Inertial sensor drivers

pub mod lsm6ds3;

pub use lsm6ds3::{AccelConfig, DataRate, FullScale, ImuError, Lsm6ds3};
