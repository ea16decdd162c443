//! Write side: splitting one stream across size-bounded parts.

use std::io::{self, Write};

use crate::{Error, Result};

/// Source of fresh part handles for a [`SplitWriter`].
///
/// Each call opens the next part in sequence. Implementors that track paths
/// (such as [`MultiPartFile`](super::MultiPartFile)) record the part as soon
/// as it has been opened.
pub trait PartFactory {
    /// The writable handle for a single part.
    type Part: Write;

    /// Opens the next part for writing.
    fn open_next(&mut self) -> Result<Self::Part>;
}

/// A writer that splits its output across multiple parts.
///
/// Bytes are forwarded to the current part until it holds the configured
/// number of bytes; the factory is then asked for the next part. A single
/// write may be spread over any number of parts. The first part is opened on
/// the first call to `write`, even for an empty buffer.
///
/// Every opened part stays open until [`finish`](Self::finish) or drop, and
/// is released in the order it was opened.
///
/// # Example
///
/// ```rust,no_run
/// use std::io::Write;
/// use partfile::{MultiPartFile, SplitWriter};
///
/// let mut writer = SplitWriter::new(50 * 1024 * 1024, MultiPartFile::for_writing("out.bin"))?;
/// writer.write_all(b"payload")?;
///
/// let (parts, sizes) = writer.finish()?;
/// println!("Created {} parts: {:?}", sizes.len(), parts.files());
/// # Ok::<(), partfile::Error>(())
/// ```
pub struct SplitWriter<F: PartFactory> {
    /// Opens new parts on rollover.
    factory: F,
    /// Opened parts, in order. The last one receives writes.
    parts: Vec<F::Part>,
    /// Bytes written to each opened part.
    sizes: Vec<u64>,
    /// Maximum bytes per part.
    part_size_limit: u64,
    /// Total bytes written across all parts.
    total_written: u64,
}

impl<F: PartFactory> SplitWriter<F> {
    /// Creates a new split writer. No part is opened until the first write.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `part_size_limit` is zero.
    pub fn new(part_size_limit: u64, factory: F) -> Result<Self> {
        if part_size_limit == 0 {
            return Err(Error::InvalidConfiguration(
                "per-file limit must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            factory,
            parts: Vec::new(),
            sizes: Vec::new(),
            part_size_limit,
            total_written: 0,
        })
    }

    /// Opens the next part and makes it current.
    fn open_next_part(&mut self) -> Result<()> {
        let part = self.factory.open_next()?;
        self.parts.push(part);
        self.sizes.push(0);
        Ok(())
    }

    /// Opens the first part if no part has been opened yet.
    pub fn begin(&mut self) -> Result<()> {
        if self.parts.is_empty() {
            self.open_next_part()?;
        }
        Ok(())
    }

    /// Writes the whole buffer, rolling over to new parts as they fill up.
    fn write_split(&mut self, mut buf: &[u8]) -> Result<()> {
        self.begin()?;

        loop {
            let current = self.parts.len() - 1;
            let remaining = self.part_size_limit - self.sizes[current];

            if buf.len() as u64 <= remaining {
                self.parts[current].write_all(buf)?;
                self.record_written(current, buf.len());
                return Ok(());
            }

            let (head, tail) = buf.split_at(remaining as usize);
            if !head.is_empty() {
                self.parts[current].write_all(head)?;
                self.record_written(current, head.len());
            }

            log::trace!(
                "Part {} reached {} bytes, {} bytes left to write",
                current + 1,
                self.part_size_limit,
                tail.len()
            );
            self.open_next_part()?;
            buf = tail;
        }
    }

    fn record_written(&mut self, index: usize, n: usize) {
        self.sizes[index] += n as u64;
        self.total_written += n as u64;
    }

    /// Returns the factory that opens new parts.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Returns the opened parts, in order.
    pub fn parts(&self) -> &[F::Part] {
        &self.parts
    }

    /// Returns the number of parts opened so far.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Returns the number of bytes written to each opened part.
    pub fn part_sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Returns the configured maximum size of a part.
    pub fn part_size_limit(&self) -> u64 {
        self.part_size_limit
    }

    /// Returns the total bytes written across all parts.
    pub fn total_written(&self) -> u64 {
        self.total_written
    }

    /// Returns the space left in the current part.
    ///
    /// Before the first write this is the full limit.
    pub fn remaining_in_part(&self) -> u64 {
        self.part_size_limit - self.sizes.last().copied().unwrap_or(0)
    }

    /// Finishes writing.
    ///
    /// Flushes every part in the order it was opened, then releases them.
    /// Returns the factory together with the size of each part.
    pub fn finish(mut self) -> Result<(F, Vec<u64>)> {
        for part in self.parts.iter_mut() {
            part.flush()?;
        }

        let Self {
            factory,
            parts,
            sizes,
            ..
        } = self;
        drop(parts);

        Ok((factory, sizes))
    }
}

impl<F: PartFactory> Write for SplitWriter<F> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_split(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for part in self.parts.iter_mut() {
            part.flush()?;
        }
        Ok(())
    }
}

impl<F: PartFactory> std::fmt::Debug for SplitWriter<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitWriter")
            .field("part_size_limit", &self.part_size_limit)
            .field("part_count", &self.parts.len())
            .field("total_written", &self.total_written)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out in-memory parts, optionally failing after a number of opens.
    #[derive(Default)]
    struct MemoryParts {
        opened: usize,
        fail_after: Option<usize>,
    }

    impl PartFactory for MemoryParts {
        type Part = Vec<u8>;

        fn open_next(&mut self) -> Result<Vec<u8>> {
            if self.fail_after == Some(self.opened) {
                return Err(Error::Io(io::Error::other("disk full")));
            }
            self.opened += 1;
            Ok(Vec::new())
        }
    }

    fn writer(limit: u64) -> SplitWriter<MemoryParts> {
        SplitWriter::new(limit, MemoryParts::default()).unwrap()
    }

    #[test]
    fn test_zero_limit_rejected() {
        let result = SplitWriter::new(0, MemoryParts::default());
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_no_part_before_first_write() {
        let writer = writer(10);
        assert_eq!(writer.part_count(), 0);
        assert_eq!(writer.factory().opened, 0);
        assert_eq!(writer.remaining_in_part(), 10);
    }

    #[test]
    fn test_empty_write_opens_first_part() {
        let mut writer = writer(10);
        // write_all skips empty buffers, so call write directly.
        assert_eq!(writer.write(&[]).unwrap(), 0);
        assert_eq!(writer.part_count(), 1);
        assert_eq!(writer.part_sizes(), &[0]);
    }

    #[test]
    fn test_single_part() {
        let mut writer = writer(100);
        writer.write_all(&[7u8; 60]).unwrap();

        assert_eq!(writer.part_count(), 1);
        assert_eq!(writer.parts()[0], vec![7u8; 60]);

        let (factory, sizes) = writer.finish().unwrap();
        assert_eq!(factory.opened, 1);
        assert_eq!(sizes, vec![60]);
    }

    #[test]
    fn test_single_write_spans_many_parts() {
        let mut writer = writer(10);
        let data: Vec<u8> = (0..35).collect();
        assert_eq!(writer.write(&data).unwrap(), 35);

        assert_eq!(writer.part_count(), 4);
        assert_eq!(writer.part_sizes(), &[10, 10, 10, 5]);
        assert_eq!(writer.parts().concat(), data);
        assert_eq!(writer.total_written(), 35);
        assert_eq!(writer.remaining_in_part(), 5);
    }

    #[test]
    fn test_exact_fill_does_not_open_next_part() {
        let mut writer = writer(10);
        writer.write_all(&[1u8; 20]).unwrap();

        assert_eq!(writer.part_count(), 2);
        assert_eq!(writer.part_sizes(), &[10, 10]);
        assert_eq!(writer.remaining_in_part(), 0);

        writer.write_all(&[2u8; 1]).unwrap();
        assert_eq!(writer.part_count(), 3);
        assert_eq!(writer.part_sizes(), &[10, 10, 1]);
    }

    #[test]
    fn test_small_writes_across_boundaries() {
        let mut writer = writer(4);
        for i in 0..5u8 {
            writer.write_all(&[i; 3]).unwrap();
        }

        assert_eq!(writer.part_sizes(), &[4, 4, 4, 3]);
        assert_eq!(
            writer.parts().concat(),
            vec![0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]
        );
    }

    #[test]
    fn test_factory_failure_propagates() {
        let factory = MemoryParts {
            opened: 0,
            fail_after: Some(2),
        };
        let mut writer = SplitWriter::new(5, factory).unwrap();

        let err = writer.write_all(&[0u8; 12]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);

        // Bytes already placed in earlier parts stay there.
        assert_eq!(writer.part_sizes(), &[5, 5]);
    }
}
