//! Tail command: seek to the requested line, then stream the rest of the file.
//!
//! # Memory Complexity
//!
//! O(1) - one scan buffer for the seek, one output buffer for the copy.
//!
//! # Requirements
//!
//! Input must be a regular, seekable file of known size. Pipes and other
//! unbounded streams are not supported.

use crate::config::ScanConfig;
use crate::error::{Result, TailError};
use crate::line_spec::LineSpec;
use crate::seek::{seek_to_line_with, SeekStats};
use crate::source::SizedSource;
use crate::streaming::TailWriter;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Tail command configuration.
#[derive(Debug, Clone)]
pub struct TailCommand {
    /// Where output starts
    pub lines: LineSpec,
    /// Scan buffer capacities
    pub config: ScanConfig,
}

impl Default for TailCommand {
    fn default() -> Self {
        Self::new(LineSpec::default())
    }
}

impl TailCommand {
    pub fn new(lines: LineSpec) -> Self {
        Self {
            lines,
            config: ScanConfig::default(),
        }
    }

    /// Set the scan buffer configuration.
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Use the same scan buffer size for both directions.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.config = ScanConfig::with_buffer_size(size);
        self
    }

    /// Tail a single file into `output`.
    pub fn run<P: AsRef<Path>, W: Write>(&self, path: P, output: &mut W) -> Result<TailStats> {
        let mut file = open(path.as_ref())?;
        self.run_source(&mut file, output)
    }

    /// Tail an already opened source into `output`.
    pub fn run_source<S: SizedSource + ?Sized, W: Write>(
        &self,
        source: &mut S,
        output: &mut W,
    ) -> Result<TailStats> {
        let mut writer = TailWriter::new(output);
        let stats = self.tail_into(source, &mut writer)?;
        writer.flush()?;
        Ok(stats)
    }

    /// Tail several files in order.
    ///
    /// With `headers`, each file is preceded by `==> path <==` and files are
    /// separated by a blank line. Stops at the first file that fails.
    pub fn run_many<P: AsRef<Path>, W: Write>(
        &self,
        paths: &[P],
        output: &mut W,
        headers: bool,
    ) -> Result<Vec<TailStats>> {
        let mut writer = TailWriter::new(output);
        let mut all = Vec::with_capacity(paths.len());

        for path in paths {
            let path = path.as_ref();
            let mut file = open(path)?;
            if headers {
                writer.write_header(&path.display().to_string())?;
            }
            all.push(self.tail_into(&mut file, &mut writer)?);
        }

        writer.flush()?;
        Ok(all)
    }

    fn tail_into<S: SizedSource + ?Sized, W: Write>(
        &self,
        source: &mut S,
        writer: &mut TailWriter<W>,
    ) -> Result<TailStats> {
        let seek = seek_to_line_with(source, self.lines, &self.config)?;
        let bytes_written = writer.copy_to_end(source)?;
        debug!(offset = seek.offset, bytes_written, "tail copied");

        Ok(TailStats {
            offset: seek.offset,
            bytes_written,
            seek,
        })
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| TailError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Statistics from a tail run.
#[derive(Debug, Default, Clone, Copy)]
pub struct TailStats {
    /// Byte offset output started from
    pub offset: u64,
    /// Bytes copied to the output
    pub bytes_written: u64,
    /// Seek bookkeeping
    pub seek: SeekStats,
}

impl fmt::Display for TailStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "offset={}, bytes_written={}, windows={}, bytes_scanned={}",
            self.offset, self.bytes_written, self.seek.windows, self.seek.bytes_scanned
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_default_last_ten() {
        let content: String = (1..=15).map(|i| format!("line{}\n", i)).collect();
        let file = create_temp_file(content.as_bytes());

        let mut output = Vec::new();
        let stats = TailCommand::default().run(file.path(), &mut output).unwrap();

        let expected: String = (6..=15).map(|i| format!("line{}\n", i)).collect();
        assert_eq!(String::from_utf8(output).unwrap(), expected);
        assert_eq!(stats.bytes_written, expected.len() as u64);
        assert_eq!(stats.offset, (content.len() - expected.len()) as u64);
    }

    #[test]
    fn test_from_line() {
        let file = create_temp_file(b"a\nb\nc\n");
        let mut output = Vec::new();
        TailCommand::new(LineSpec::from_line(2))
            .run(file.path(), &mut output)
            .unwrap();
        assert_eq!(output, b"b\nc\n");
    }

    #[test]
    fn test_large_file_small_buffer() {
        let content: String = (0..2000).map(|i| format!("{:05}\n", i)).collect();
        let file = create_temp_file(content.as_bytes());

        let mut output = Vec::new();
        let stats = TailCommand::new(LineSpec::last(3))
            .with_buffer_size(64)
            .run(file.path(), &mut output)
            .unwrap();
        assert_eq!(output, b"01997\n01998\n01999\n");
        assert_eq!(stats.seek.windows, 1);
    }

    #[test]
    fn test_run_source_current_position() {
        let mut source = Cursor::new(b"skip\nkeep\n".to_vec());
        source.set_position(5);
        let mut output = Vec::new();
        let stats = TailCommand::new(LineSpec::Current)
            .run_source(&mut source, &mut output)
            .unwrap();
        assert_eq!(output, b"keep\n");
        assert_eq!(stats.offset, 5);
    }

    #[test]
    fn test_run_many_with_headers() {
        let a = create_temp_file(b"1\n2\n3\n");
        let b = create_temp_file(b"x\ny");

        let mut output = Vec::new();
        let stats = TailCommand::new(LineSpec::last(1))
            .run_many(&[a.path(), b.path()], &mut output, true)
            .unwrap();

        let expected = format!(
            "==> {} <==\n3\n\n==> {} <==\ny",
            a.path().display(),
            b.path().display()
        );
        assert_eq!(String::from_utf8(output).unwrap(), expected);
        assert_eq!(stats.len(), 2);
    }

    #[test]
    fn test_run_many_without_headers() {
        let a = create_temp_file(b"1\n2\n");
        let b = create_temp_file(b"3\n4\n");

        let mut output = Vec::new();
        TailCommand::new(LineSpec::last(1))
            .run_many(&[a.path(), b.path()], &mut output, false)
            .unwrap();
        assert_eq!(output, b"2\n4\n");
    }

    #[test]
    fn test_missing_file() {
        let mut output = Vec::new();
        let err = TailCommand::default()
            .run("/nonexistent/tailseek/input.log", &mut output)
            .unwrap_err();
        assert!(matches!(err, TailError::Open { .. }));
        assert!(output.is_empty());
    }
}
