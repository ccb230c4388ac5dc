//! Forward scanner: locate line `N` counted from the start of the file.
//!
//! # Algorithm
//!
//! 1. Rewind to offset 0
//! 2. Read fixed-size chunks, counting terminators per chunk
//! 3. Once the running count reaches `N - 1` inside a chunk, find that exact
//!    terminator and seek back to the byte after it
//! 4. EOF before that point leaves the cursor at EOF
//!
//! A terminator belongs to the chunk in which it occurs, so a boundary
//! sitting on the last byte of a chunk resolves to the first byte of the
//! next chunk.

use super::{count_terminators, fill_buf, SeekStats};
use crate::config::{ScanConfig, LINE_TERMINATOR};
use crate::error::Result;
use std::io::{Read, Seek, SeekFrom};
use tracing::trace;

/// Position `source` at the first byte of line `line` (1-indexed).
///
/// When the file has fewer than `line` lines the cursor is left at EOF.
pub fn seek_forward<R: Read + Seek + ?Sized>(
    source: &mut R,
    line: u64,
    config: &ScanConfig,
) -> Result<SeekStats> {
    let mut stats = SeekStats::default();
    source.seek(SeekFrom::Start(0))?;

    // Line n starts right after terminator n - 1.
    let wanted = line.saturating_sub(1);
    if wanted == 0 {
        return Ok(stats);
    }

    let mut buf = vec![0u8; config.forward_buffer];
    let mut chunk_start: u64 = 0;

    loop {
        let filled = fill_buf(source, &mut buf)?;
        if filled == 0 {
            // Fewer lines than requested: nothing left to output.
            stats.offset = chunk_start;
            return Ok(stats);
        }

        let chunk = &buf[..filled];
        let count = count_terminators(chunk);
        let remaining = wanted - stats.terminators_seen;
        stats.windows += 1;
        stats.bytes_scanned += filled as u64;

        trace!(chunk_start, filled, count, remaining, "forward chunk");

        if count >= remaining {
            let nth = (remaining - 1) as usize;
            if let Some(idx) = memchr::memchr_iter(LINE_TERMINATOR, chunk).nth(nth) {
                let after = idx + 1;
                source.seek(SeekFrom::Current(-((filled - after) as i64)))?;
                stats.terminators_seen += remaining;
                stats.offset = chunk_start + after as u64;
                return Ok(stats);
            }
        }

        stats.terminators_seen += count;
        chunk_start += filled as u64;
    }
}
