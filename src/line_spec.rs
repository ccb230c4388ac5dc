//! The signed line specification that selects where output starts.

use crate::error::{Result, TailError};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Where output should start.
///
/// Mirrors a signed integer `L`: positive counts from the beginning of the
/// file (1-indexed), negative counts back from the end (the last line is
/// `-1`), and zero leaves the cursor where it is. `AtEnd` is the
/// "zero trailing lines" request of the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineSpec {
    /// Start at the n-th line from the beginning of the file.
    FromStart(NonZeroU64),
    /// Start n lines before end-of-file, inclusive.
    FromEnd(NonZeroU64),
    /// No seek: start at the current cursor position.
    Current,
    /// Zero lines from the end: cursor at EOF, nothing to output.
    AtEnd,
}

impl LineSpec {
    /// Build a spec from a signed line number.
    pub fn from_signed(lines: i64) -> Self {
        match NonZeroU64::new(lines.unsigned_abs()) {
            None => LineSpec::Current,
            Some(n) if lines > 0 => LineSpec::FromStart(n),
            Some(n) => LineSpec::FromEnd(n),
        }
    }

    /// Last `n` lines of the file. `0` yields an empty tail.
    pub fn last(n: u64) -> Self {
        NonZeroU64::new(n).map_or(LineSpec::AtEnd, LineSpec::FromEnd)
    }

    /// Everything from line `n` onwards (1-indexed). `0` means no seek.
    pub fn from_line(n: u64) -> Self {
        NonZeroU64::new(n).map_or(LineSpec::Current, LineSpec::FromStart)
    }

    /// The signed form, saturating at `i64` bounds.
    ///
    /// `AtEnd` has no signed form of its own and reports `i64::MAX`, a line
    /// past the end of any file.
    pub fn as_signed(&self) -> i64 {
        match *self {
            LineSpec::FromStart(n) => i64::try_from(n.get()).unwrap_or(i64::MAX),
            LineSpec::FromEnd(n) => i64::try_from(n.get()).map_or(i64::MIN, |n| -n),
            LineSpec::Current => 0,
            LineSpec::AtEnd => i64::MAX,
        }
    }

    /// Parse the `-n` argument of the command line.
    ///
    /// - `N` or `-N`: the last N lines
    /// - `0` or `-0`: no lines, cursor at EOF
    /// - `+N`: from line N to the end
    /// - `+0`: no seek, output the whole file
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || TailError::InvalidLineSpec(format!("'{}'", s));

        let (from_start, digits) = match s.as_bytes().first() {
            Some(b'+') => (true, &s[1..]),
            Some(b'-') => (false, &s[1..]),
            Some(_) => (false, s),
            None => return Err(invalid()),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let n: u64 = digits.parse().map_err(|_| invalid())?;

        Ok(if from_start {
            LineSpec::from_line(n)
        } else {
            LineSpec::last(n)
        })
    }
}

impl Default for LineSpec {
    /// The last ten lines.
    fn default() -> Self {
        LineSpec::last(10)
    }
}

impl From<i64> for LineSpec {
    fn from(lines: i64) -> Self {
        LineSpec::from_signed(lines)
    }
}

impl FromStr for LineSpec {
    type Err = TailError;

    fn from_str(s: &str) -> Result<Self> {
        LineSpec::parse(s)
    }
}

impl fmt::Display for LineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineSpec::FromStart(n) => write!(f, "+{}", n),
            LineSpec::FromEnd(n) => write!(f, "-{}", n),
            LineSpec::Current => write!(f, "+0"),
            LineSpec::AtEnd => write!(f, "-0"),
        }
    }
}
