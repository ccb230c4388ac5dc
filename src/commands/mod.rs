//! Command implementations for tailseek.

pub mod tail;

pub use tail::{TailCommand, TailStats};
