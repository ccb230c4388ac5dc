//! Line-seeking engine.
//!
//! Positions a seekable source at the first byte of a requested line without
//! loading the file into memory. Two scanners share one entry point:
//!
//! - [`forward`]: walks fixed-size chunks from the start of the file,
//!   counting terminators until line `N` begins.
//! - [`backward`]: walks fixed-size windows back from the end of the file
//!   until `N` lines from the end have been seen.
//!
//! # Memory Complexity
//!
//! O(1) - a single scan buffer of [`ScanConfig`] capacity, independent of
//! file size and of how far the target line lies from either end.
//!
//! After a successful call, copying everything from the cursor to EOF
//! reproduces the requested lines byte for byte. After a failed call the
//! cursor position is unspecified.

pub mod backward;
pub mod forward;

pub use backward::{seek_backward, BackwardScan, ScanState, Window};
pub use forward::seek_forward;

use crate::config::{ScanConfig, LINE_TERMINATOR};
use crate::error::Result;
use crate::line_spec::LineSpec;
use crate::source::SizedSource;
use std::fmt;
use std::io::{self, Read, SeekFrom};
use tracing::debug;

/// Bookkeeping from one seek call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeekStats {
    /// Resolved offset: where the requested line starts.
    pub offset: u64,
    /// Number of buffer fills performed.
    pub windows: usize,
    /// Bytes read while scanning.
    pub bytes_scanned: u64,
    /// Line terminators counted toward the target.
    pub terminators_seen: u64,
}

impl fmt::Display for SeekStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "offset={}, windows={}, bytes_scanned={}, terminators={}",
            self.offset, self.windows, self.bytes_scanned, self.terminators_seen
        )
    }
}

/// Position `source` at the start of the line selected by `spec`, using the
/// default buffer sizes.
pub fn seek_to_line<S: SizedSource + ?Sized>(source: &mut S, spec: LineSpec) -> Result<SeekStats> {
    seek_to_line_with(source, spec, &ScanConfig::default())
}

/// Position `source` at the start of the line selected by `spec`.
///
/// - `FromStart(n)`: cursor at the first byte of line `n`, or EOF when the
///   file has fewer than `n` lines.
/// - `FromEnd(n)`: cursor at the first byte of the n-th line from the end,
///   or offset 0 when the file has fewer than `n` lines.
/// - `Current`: no-op; the cursor is not moved and nothing is read.
/// - `AtEnd`: cursor at EOF without scanning.
pub fn seek_to_line_with<S: SizedSource + ?Sized>(
    source: &mut S,
    spec: LineSpec,
    config: &ScanConfig,
) -> Result<SeekStats> {
    config.validate()?;

    let stats = match spec {
        LineSpec::FromStart(line) => seek_forward(source, line.get(), config)?,
        LineSpec::FromEnd(lines) => seek_backward(source, lines.get(), config)?,
        LineSpec::Current => SeekStats {
            offset: source.stream_position()?,
            ..SeekStats::default()
        },
        LineSpec::AtEnd => SeekStats {
            offset: source.seek(SeekFrom::End(0))?,
            ..SeekStats::default()
        },
    };

    debug!(%spec, offset = stats.offset, windows = stats.windows, "resolved start offset");
    Ok(stats)
}

/// Fill as much of `buf` as the source allows. Returns 0 only at EOF.
pub(crate) fn fill_buf<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Count line terminators in a chunk.
#[inline]
pub(crate) fn count_terminators(chunk: &[u8]) -> u64 {
    memchr::memchr_iter(LINE_TERMINATOR, chunk).count() as u64
}
