//! Error type shared by the seek engine and the command layer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while positioning or copying a file.
#[derive(Error, Debug)]
pub enum TailError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot open '{}': {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("Invalid line count: {0}")]
    InvalidLineSpec(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TailError>;
