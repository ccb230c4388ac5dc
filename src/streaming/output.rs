//! Buffered output for tailed content.
//!
//! Bytes from the resolved offset onward are copied through unchanged;
//! the writer only adds the optional per-file headers.

use crate::config::DEFAULT_OUTPUT_BUFFER;
use crate::error::{Result, TailError};
use std::io::{self, BufWriter, Read, Write};

/// Buffered sink for tail output.
pub struct TailWriter<W: Write> {
    writer: BufWriter<W>,
    files_written: usize,
}

impl<W: Write> TailWriter<W> {
    /// Create a new TailWriter with the default 64KB buffer.
    pub fn new(output: W) -> Self {
        Self::with_capacity(DEFAULT_OUTPUT_BUFFER, output)
    }

    /// Create a new TailWriter with specified buffer size.
    pub fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            files_written: 0,
        }
    }

    /// Write a `==> name <==` header, separated from any previous file by a
    /// blank line.
    pub fn write_header(&mut self, name: &str) -> Result<()> {
        if self.files_written > 0 {
            self.writer.write_all(b"\n").map_err(TailError::Io)?;
        }
        self.writer.write_all(b"==> ").map_err(TailError::Io)?;
        self.writer.write_all(name.as_bytes()).map_err(TailError::Io)?;
        self.writer.write_all(b" <==\n").map_err(TailError::Io)?;
        Ok(())
    }

    /// Copy everything the reader has left. Returns the number of bytes copied.
    pub fn copy_to_end<R: Read + ?Sized>(&mut self, reader: &mut R) -> Result<u64> {
        let copied = io::copy(reader, &mut self.writer)?;
        self.files_written += 1;
        Ok(copied)
    }

    /// Flush the output buffer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(TailError::Io)?;
        Ok(())
    }
}

/// Copy all bytes from the reader's cursor to EOF into `output`.
pub fn copy_to_end<R: Read + ?Sized, W: Write>(reader: &mut R, output: &mut W) -> Result<u64> {
    let mut writer = TailWriter::new(output);
    let copied = writer.copy_to_end(reader)?;
    writer.flush()?;
    Ok(copied)
}
