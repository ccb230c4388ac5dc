//! Seekable byte sources with a known total size.
//!
//! The seek engine never buffers a whole file, so it needs random access
//! plus the total length up front. Anything that can report its size and
//! implements `Read + Seek` qualifies.

use std::fs::File;
use std::io::{self, Cursor, Read, Seek};

/// A readable, seekable byte source whose total length is known.
pub trait SizedSource: Read + Seek {
    /// Total number of bytes in the source.
    ///
    /// Implementations must not move the cursor.
    fn byte_len(&mut self) -> io::Result<u64>;
}

impl SizedSource for File {
    #[inline]
    fn byte_len(&mut self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }
}

impl<T: AsRef<[u8]>> SizedSource for Cursor<T> {
    #[inline]
    fn byte_len(&mut self) -> io::Result<u64> {
        Ok(self.get_ref().as_ref().len() as u64)
    }
}

impl<S: SizedSource + ?Sized> SizedSource for &mut S {
    #[inline]
    fn byte_len(&mut self) -> io::Result<u64> {
        (**self).byte_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cursor_len() {
        let mut cursor = Cursor::new(b"a\nb\n".to_vec());
        assert_eq!(cursor.byte_len().unwrap(), 4);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_file_len() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "hello\nworld\n").unwrap();
        tmp.flush().unwrap();

        let mut file = File::open(tmp.path()).unwrap();
        assert_eq!(file.byte_len().unwrap(), 12);
        assert_eq!(file.stream_position().unwrap(), 0);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn len_of<S: SizedSource>(mut source: S) -> u64 {
            source.byte_len().unwrap()
        }

        let mut cursor = Cursor::new(b"xyz".as_slice());
        assert_eq!(len_of(&mut cursor), 3);
        assert_eq!(len_of(&mut cursor), 3);
    }
}
