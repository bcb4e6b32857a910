//! The sampling pipeline
//!
//! [`Shared`] is the state interrupt context hands to the main loop;
//! [`MainLoop`] is the foreground consumer that drains it.

pub mod main_loop;
pub mod shared;

pub use main_loop::{Activity, CommandOutcome, LoopError, MainLoop};
pub use shared::Shared;
