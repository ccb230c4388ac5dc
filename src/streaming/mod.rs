//! Streaming output for tail commands.
//!
//! The final step after a seek: copy bytes from the resolved offset to the
//! output sink through a fixed-size buffer.

pub mod output;

pub use output::{copy_to_end, TailWriter};
