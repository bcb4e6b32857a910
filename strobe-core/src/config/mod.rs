//! Configuration types
//!
//! Driver configurations mutated at runtime by command bytes, and the
//! demo settings fixed at build time from `demo.toml`.

pub mod demo;
pub mod driver;

pub use demo::*;
pub use driver::*;
