//! Read side: presenting a queue of parts as one stream.

use std::collections::VecDeque;
use std::io::{self, Read};

/// A reader that reads its parts one after another.
///
/// Parts are consumed in queue order. When the current part is exhausted it
/// is dropped (closing it) and reading continues with the next one. A single
/// `read` call never returns bytes from more than one part, but empty parts
/// are skipped transparently.
///
/// # Example
///
/// ```rust
/// use std::io::Read;
/// use partfile::ConcatReader;
///
/// let mut reader = ConcatReader::new(vec![&b"Hello, "[..], &b""[..], &b"World"[..]]);
/// let mut text = String::new();
/// reader.read_to_string(&mut text).unwrap();
/// assert_eq!(text, "Hello, World");
/// ```
pub struct ConcatReader<R> {
    /// Parts not yet exhausted, front is current.
    pending: VecDeque<R>,
}

impl<R: Read> ConcatReader<R> {
    /// Creates a reader over already-opened parts, in logical order.
    pub fn new(parts: impl IntoIterator<Item = R>) -> Self {
        Self {
            pending: parts.into_iter().collect(),
        }
    }

    /// Returns the number of parts that have not been exhausted yet.
    pub fn remaining_parts(&self) -> usize {
        self.pending.len()
    }
}

impl<R: Read> Read for ConcatReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        while let Some(current) = self.pending.front_mut() {
            let n = current.read(buf)?;
            if n > 0 {
                return Ok(n);
            }
            self.pending.pop_front();
            log::debug!(
                "Part exhausted, {} part(s) left to read",
                self.pending.len()
            );
        }

        Ok(0)
    }
}

impl<R: Read> From<Vec<R>> for ConcatReader<R> {
    fn from(parts: Vec<R>) -> Self {
        Self::new(parts)
    }
}

impl<R: Read> FromIterator<R> for ConcatReader<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<R> std::fmt::Debug for ConcatReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcatReader")
            .field("remaining_parts", &self.pending.len())
            .finish()
    }
}
