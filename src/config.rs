//! Scan buffer configuration.
//!
//! The seek engine never holds more than one scan buffer at a time, so these
//! capacities bound its memory use regardless of file size. Configuration is
//! passed explicitly to each call; there is no process-wide state.

use crate::error::{Result, TailError};

/// Default forward scan buffer (8 KB).
pub const DEFAULT_FORWARD_BUFFER: usize = 8 * 1024;

/// Default backward scan window (8 KB).
pub const DEFAULT_BACKWARD_BUFFER: usize = 8 * 1024;

/// Default output buffer for the final bulk copy (64 KB).
pub const DEFAULT_OUTPUT_BUFFER: usize = 64 * 1024;

/// Line terminator byte.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Buffer capacities used by the forward and backward scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Chunk size read per step when scanning from the start of the file.
    pub forward_buffer: usize,
    /// Window size read per step when scanning back from the end of the file.
    pub backward_buffer: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanConfig {
    pub const fn new() -> Self {
        Self {
            forward_buffer: DEFAULT_FORWARD_BUFFER,
            backward_buffer: DEFAULT_BACKWARD_BUFFER,
        }
    }

    /// Use the same capacity for both scanners.
    pub const fn with_buffer_size(size: usize) -> Self {
        Self {
            forward_buffer: size,
            backward_buffer: size,
        }
    }

    /// Set the forward scan buffer capacity.
    pub fn with_forward_buffer(mut self, size: usize) -> Self {
        self.forward_buffer = size;
        self
    }

    /// Set the backward scan window capacity.
    pub fn with_backward_buffer(mut self, size: usize) -> Self {
        self.backward_buffer = size;
        self
    }

    /// Reject zero-sized buffers, which would never make progress.
    pub fn validate(&self) -> Result<()> {
        if self.forward_buffer == 0 {
            return Err(TailError::InvalidConfig(
                "forward buffer must be at least 1 byte".to_string(),
            ));
        }
        if self.backward_buffer == 0 {
            return Err(TailError::InvalidConfig(
                "backward buffer must be at least 1 byte".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.forward_buffer, 8192);
        assert_eq!(config.backward_buffer, 8192);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = ScanConfig::new()
            .with_forward_buffer(16)
            .with_backward_buffer(4);
        assert_eq!(config.forward_buffer, 16);
        assert_eq!(config.backward_buffer, 4);
        assert_eq!(ScanConfig::with_buffer_size(3).backward_buffer, 3);
    }

    #[test]
    fn test_zero_buffer_rejected() {
        assert!(ScanConfig::new().with_forward_buffer(0).validate().is_err());
        assert!(ScanConfig::new().with_backward_buffer(0).validate().is_err());
    }
}
