//! Stream façade over a multi-part file.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

use super::{ConcatReader, MultiPartFile, SplitWriter};
use crate::{Error, Result};

enum StreamInner {
    Read {
        parts: MultiPartFile,
        reader: ConcatReader<BufReader<File>>,
    },
    Write(SplitWriter<MultiPartFile>),
}

/// A readable or writable stream over the parts of a multi-part file.
///
/// Streams are obtained from [`MultiPartFile::open_read`],
/// [`MultiPartFile::open_read_files`] or [`MultiPartFile::create`]. A read
/// stream only supports [`Read`]; a write stream only supports [`Write`].
/// Using the other direction, or seeking, fails with
/// [`io::ErrorKind::Unsupported`].
///
/// Dropping the stream releases every part handle. Use
/// [`finish`](Self::finish) to observe errors from the final flush.
pub struct MultiPartFileStream {
    inner: StreamInner,
}

impl MultiPartFileStream {
    pub(crate) fn reading(parts: MultiPartFile, reader: ConcatReader<BufReader<File>>) -> Self {
        Self {
            inner: StreamInner::Read { parts, reader },
        }
    }

    pub(crate) fn writing(writer: SplitWriter<MultiPartFile>) -> Self {
        Self {
            inner: StreamInner::Write(writer),
        }
    }

    /// Returns the part paths behind this stream.
    ///
    /// For a write stream this lists the parts created so far.
    pub fn files(&self) -> &[PathBuf] {
        match &self.inner {
            StreamInner::Read { parts, .. } => parts.files(),
            StreamInner::Write(writer) => writer.factory().files(),
        }
    }

    /// Returns true for a read stream.
    pub fn can_read(&self) -> bool {
        matches!(self.inner, StreamInner::Read { .. })
    }

    /// Returns true for a write stream.
    pub fn can_write(&self) -> bool {
        matches!(self.inner, StreamInner::Write(_))
    }

    /// Always false: seeking is not supported in either direction.
    pub fn can_seek(&self) -> bool {
        false
    }

    /// Creates the first part of a write stream if it does not exist yet.
    pub(crate) fn begin(&mut self) -> Result<()> {
        match &mut self.inner {
            StreamInner::Write(writer) => writer.begin(),
            StreamInner::Read { .. } => Err(Error::unsupported("write to a read stream")),
        }
    }

    /// Closes the stream and returns the final list of part paths.
    ///
    /// For a write stream every part is flushed in order before it is closed,
    /// then parts of an older, longer set at the same base path are removed.
    /// Dropping a write stream without calling `finish` skips that cleanup.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing a part fails.
    pub fn finish(self) -> Result<Vec<PathBuf>> {
        match self.inner {
            StreamInner::Read { parts, reader } => {
                drop(reader);
                Ok(parts.files().to_vec())
            }
            StreamInner::Write(writer) => {
                let (parts, sizes) = writer.finish()?;
                parts.remove_stale_parts()?;
                log::debug!(
                    "Closed {} part(s), {} bytes total",
                    sizes.len(),
                    sizes.iter().sum::<u64>()
                );
                Ok(parts.files().to_vec())
            }
        }
    }
}

impl Read for MultiPartFileStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.inner {
            StreamInner::Read { reader, .. } => reader.read(buf),
            StreamInner::Write(_) => Err(Error::unsupported("read from a write stream").into()),
        }
    }
}

/// Writing to a read stream fails with [`io::ErrorKind::Unsupported`].
/// Flushing a read stream has nothing to do and succeeds.
impl Write for MultiPartFileStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            StreamInner::Write(writer) => writer.write(buf),
            StreamInner::Read { .. } => Err(Error::unsupported("write to a read stream").into()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            StreamInner::Write(writer) => writer.flush(),
            StreamInner::Read { .. } => Ok(()),
        }
    }
}

impl Seek for MultiPartFileStream {
    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Err(Error::unsupported("seek").into())
    }
}

impl std::fmt::Debug for MultiPartFileStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = if self.can_read() { "read" } else { "write" };
        f.debug_struct("MultiPartFileStream")
            .field("mode", &mode)
            .field("files", &self.files())
            .finish()
    }
}
