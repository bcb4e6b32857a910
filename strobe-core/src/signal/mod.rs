//! Interrupt-to-main-loop handoff
//!
//! All primitives here are single-writer/single-reader and lossy: a value
//! posted before the previous one was consumed replaces it. Nothing ever
//! queues.

pub mod flag;
pub mod mailbox;

pub use flag::EventFlag;
pub use mailbox::{Mailbox, SampleSlot};
