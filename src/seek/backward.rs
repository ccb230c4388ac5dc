//! Backward scanner: locate the n-th line counted back from end-of-file.
//!
//! # Algorithm
//!
//! The scanned region is `[0, limit)`, where `limit` drops a terminator on
//! the very last byte of the file: that byte ends the last line and is not a
//! boundary between lines. Windows of fixed capacity are then read forward,
//! each one ending where the previous one began:
//!
//! ```text
//!   0                                               limit
//!   | final (clamped) |   middle    |   middle    |
//!                                    <--- first ---
//! ```
//!
//! Terminators in each window are counted from its end. When the window
//! holds the n-th terminator from the end, the line starts right after it.
//! When the final window (the one starting at offset 0) runs out first, the
//! file has fewer than n lines and the answer is offset 0.
//!
//! The window planning and per-window bookkeeping live in [`BackwardScan`],
//! which does no I/O and can be driven directly with byte slices.

use super::{count_terminators, SeekStats};
use crate::config::{ScanConfig, LINE_TERMINATOR};
use crate::error::Result;
use crate::source::SizedSource;
use std::io::SeekFrom;
use tracing::trace;

/// A span of the file to read next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: u64,
    pub len: usize,
}

/// Where the backward scan stands between windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// The next window has unread bytes before it.
    ScanningMiddle(Window),
    /// The next window starts at offset 0; it is the last one.
    ScanningFinalWindow(Window),
    /// The target line starts at this offset.
    Done(u64),
}

impl ScanState {
    /// Plan the window ending at `window_end`, clamped at the start of file.
    pub fn before(window_end: u64, capacity: usize) -> Self {
        let capacity = capacity as u64;
        if window_end == 0 {
            ScanState::Done(0)
        } else if window_end > capacity {
            ScanState::ScanningMiddle(Window {
                start: window_end - capacity,
                len: capacity as usize,
            })
        } else {
            ScanState::ScanningFinalWindow(Window {
                start: 0,
                len: window_end as usize,
            })
        }
    }

    /// The window still to be read, if any.
    pub fn window(&self) -> Option<Window> {
        match *self {
            ScanState::ScanningMiddle(w) | ScanState::ScanningFinalWindow(w) => Some(w),
            ScanState::Done(_) => None,
        }
    }
}

/// End of the region that may contain line boundaries.
///
/// A terminator on the last byte closes the final line rather than starting
/// a new one, so it is excluded.
#[inline]
pub fn scan_limit(len: u64, last_byte: Option<u8>) -> u64 {
    match last_byte {
        Some(LINE_TERMINATOR) => len - 1,
        _ => len,
    }
}

/// Pure state machine for the backward scan.
#[derive(Debug, Clone)]
pub struct BackwardScan {
    state: ScanState,
    remaining: u64,
    capacity: usize,
}

impl BackwardScan {
    /// Start a scan for the `lines`-th line from the end of `[0, limit)`.
    pub fn new(limit: u64, lines: u64, capacity: usize) -> Self {
        let state = if lines == 0 {
            ScanState::Done(limit)
        } else {
            ScanState::before(limit, capacity)
        };
        Self {
            state,
            remaining: lines,
            capacity,
        }
    }

    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Terminators that still have to be passed before the target is found.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Consume the bytes of the current window and move to the next state.
    ///
    /// `bytes` must be exactly the span described by the current window.
    pub fn step(&mut self, bytes: &[u8]) -> ScanState {
        let (window, is_final) = match self.state {
            ScanState::ScanningMiddle(w) => (w, false),
            ScanState::ScanningFinalWindow(w) => (w, true),
            done @ ScanState::Done(_) => return done,
        };
        debug_assert_eq!(bytes.len(), window.len);

        // `remaining` is at least 1 whenever a window is pending.
        let nth = (self.remaining - 1) as usize;
        self.state = match memchr::memrchr_iter(LINE_TERMINATOR, bytes).nth(nth) {
            Some(idx) => {
                self.remaining = 0;
                ScanState::Done(window.start + idx as u64 + 1)
            }
            None => {
                // Fewer than `remaining` terminators here: all of them count.
                self.remaining -= count_terminators(bytes);
                if is_final {
                    ScanState::Done(0)
                } else {
                    ScanState::before(window.start, self.capacity)
                }
            }
        };
        self.state
    }
}

/// Position `source` at the first byte of the `lines`-th line from the end.
///
/// The last line is `lines == 1`. When the file has fewer lines than
/// requested, the cursor is left at offset 0.
pub fn seek_backward<S: SizedSource + ?Sized>(
    source: &mut S,
    lines: u64,
    config: &ScanConfig,
) -> Result<SeekStats> {
    let mut stats = SeekStats::default();
    let len = source.byte_len()?;

    let last_byte = if len == 0 {
        None
    } else {
        let mut byte = [0u8; 1];
        source.seek(SeekFrom::End(-1))?;
        source.read_exact(&mut byte)?;
        Some(byte[0])
    };
    let limit = scan_limit(len, last_byte);

    let mut scan = BackwardScan::new(limit, lines, config.backward_buffer);
    // Small files only ever need a buffer as large as themselves.
    let capacity = usize::try_from(limit)
        .map_or(config.backward_buffer, |limit| limit.min(config.backward_buffer));
    let mut buf = vec![0u8; capacity];

    while let Some(window) = scan.state().window() {
        source.seek(SeekFrom::Start(window.start))?;
        let bytes = &mut buf[..window.len];
        source.read_exact(bytes)?;

        stats.windows += 1;
        stats.bytes_scanned += window.len as u64;
        let before = scan.remaining();
        let next = scan.step(bytes);
        stats.terminators_seen += before - scan.remaining();

        trace!(start = window.start, len = window.len, ?next, "backward window");
    }

    if let ScanState::Done(offset) = scan.state() {
        stats.offset = offset;
    }
    source.seek(SeekFrom::Start(stats.offset))?;
    Ok(stats)
}
