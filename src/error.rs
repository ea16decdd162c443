//! Error types for multi-part file operations.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes when splitting, reading, or deleting multi-part files, along
//! with a convenient [`Result<T>`] type alias.
//!
//! # Error Handling
//!
//! All fallible operations in this crate return `Result<T, Error>`. Nothing is
//! retried internally: the first failure ends the current operation and is
//! handed back to the caller.
//!
//! ```rust,no_run
//! use partfile::{Error, MultiPartFile};
//!
//! match MultiPartFile::split_file("input.bin", "output.bin", 0) {
//!     Ok(parts) => println!("{} parts", parts.len()),
//!     Err(Error::InvalidConfiguration(msg)) => eprintln!("Bad limit: {}", msg),
//!     Err(Error::Io(e)) => eprintln!("File error: {}", e),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// The main error type for multi-part file operations.
///
/// | Category | Variants | Typical Cause |
/// |----------|----------|---------------|
/// | I/O | [`Io`][Self::Io] | Opening, reading, writing or deleting a part |
/// | Configuration | [`InvalidConfiguration`][Self::InvalidConfiguration] | Zero per-file limit |
/// | Usage | [`UnsupportedOperation`][Self::UnsupportedOperation] | Reading a write stream, seeking |
/// | Integrity | [`PartMissing`][Self::PartMissing] | Gap in a discovered part sequence |
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred during file operations.
    ///
    /// Common causes include a missing part file, permission problems or a
    /// full disk. Parts already written before the failure are left on disk.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The configuration is not usable, e.g. a per-file limit of zero bytes.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The stream does not support the requested operation.
    ///
    /// Returned when reading from a write stream, writing to a read stream, or
    /// seeking on either. This is a programming error, not a recoverable
    /// condition.
    #[error("Unsupported operation: {operation}")]
    UnsupportedOperation {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// A part is missing from an otherwise sequential set of parts.
    #[error("Part {number} is missing: {}", path.display())]
    PartMissing {
        /// The part number (1-indexed) that was expected.
        number: u64,
        /// The path the missing part was expected at.
        path: PathBuf,
    },
}

impl Error {
    /// Creates an [`Error::UnsupportedOperation`].
    pub(crate) fn unsupported(operation: &'static str) -> Self {
        Self::UnsupportedOperation { operation }
    }

    /// Returns true if this error reports an unsupported stream operation.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperation { .. })
    }

    /// Returns true if this error comes from the underlying file system.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Returns the underlying [`io::ErrorKind`] for I/O errors.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io(e) => Some(e.kind()),
            _ => None,
        }
    }
}

impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::Io(e) => e,
            Error::InvalidConfiguration(_) => io::Error::new(io::ErrorKind::InvalidInput, error),
            Error::UnsupportedOperation { .. } => {
                io::Error::new(io::ErrorKind::Unsupported, error)
            }
            Error::PartMissing { .. } => io::Error::new(io::ErrorKind::NotFound, error),
        }
    }
}

/// A specialized [`Result`](std::result::Result) type for multi-part file operations.
pub type Result<T> = std::result::Result<T, Error>;
