//! tailseek: line-oriented file tailing
//!
//! This library positions a file at the start of a requested line and streams
//! the rest, without ever holding more than a fixed-size buffer in memory.
//!
//! # Features
//!
//! - **Forward seeking**: start at line `N` from the beginning of the file
//! - **Backward seeking**: start `N` lines before end-of-file
//! - **Constant memory**: scan buffers are fixed-size regardless of file size
//! - **Byte-exact output**: lines are copied through unchanged
//!
//! # Example
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::io::Read;
//! use tailseek::{seek_to_line, LineSpec};
//!
//! let mut file = File::open("app.log").unwrap();
//! seek_to_line(&mut file, LineSpec::from_signed(-10)).unwrap();
//!
//! let mut last_ten = String::new();
//! file.read_to_string(&mut last_ten).unwrap();
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod line_spec;
pub mod seek;
pub mod source;
pub mod streaming;

// Re-export commonly used types
pub use commands::{TailCommand, TailStats};
pub use config::ScanConfig;
pub use error::{Result, TailError};
pub use line_spec::LineSpec;
pub use seek::{seek_to_line, seek_to_line_with, SeekStats};
pub use source::SizedSource;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::commands::TailCommand;
    pub use crate::config::ScanConfig;
    pub use crate::line_spec::LineSpec;
    pub use crate::seek::{seek_backward, seek_forward, seek_to_line, seek_to_line_with};
    pub use crate::source::SizedSource;
    pub use crate::streaming::copy_to_end;
}
