//! # partfile
//!
//! Store one logical byte stream as a sequence of size-bounded part files,
//! and read such a sequence back as a single stream.
//!
//! ## Quick Start
//!
//! ### Splitting a File
//!
//! ```rust,no_run
//! use partfile::{MultiPartFile, Result};
//!
//! fn main() -> Result<()> {
//!     // 1 MiB per part: video.mp4, video.part2.mp4, video.part3.mp4, ...
//!     let parts = MultiPartFile::split_file("input.mp4", "out/video.mp4", 1024 * 1024)?;
//!     println!("Wrote {} parts", parts.len());
//!     Ok(())
//! }
//! ```
//!
//! ### Streaming Into Parts
//!
//! ```rust,no_run
//! use std::io::Write;
//! use partfile::{MultiPartFile, Result};
//!
//! fn main() -> Result<()> {
//!     let mut stream = MultiPartFile::create("log.txt", 10)?;
//!     stream.write_all(b"Some content for the file to write")?;
//!     let files = stream.finish()?;
//!     assert_eq!(files.len(), 4);
//!     Ok(())
//! }
//! ```
//!
//! ### Reading Parts Back
//!
//! ```rust,no_run
//! use std::io::Read;
//! use partfile::{MultiPartFile, Result};
//!
//! fn main() -> Result<()> {
//!     // Discover log.txt, log.part2.txt, ... and read them in order
//!     let mut stream = MultiPartFile::open_read("log.txt")?;
//!     let mut content = String::new();
//!     stream.read_to_string(&mut content)?;
//!
//!     // Or concatenate files that do not follow the naming convention
//!     let mut stream = MultiPartFile::open_read_files(["someFile.txt", "anotherFile.txt"])?;
//!     stream.read_to_string(&mut content)?;
//!     Ok(())
//! }
//! ```
//!
//! ### Removing Parts
//!
//! ```rust,no_run
//! use partfile::MultiPartFile;
//!
//! let removed = MultiPartFile::delete("log.txt")?;
//! println!("Removed {} files", removed.len());
//! # Ok::<(), partfile::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli` | No | Command-line interface tool |
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`], which is an alias for
//! `std::result::Result<T, Error>`. Failures are never retried, and parts
//! written before a failure are left on disk.
//!
//! ## Logging
//!
//! The crate logs part creation, opening and deletion through the [`log`]
//! facade at `debug` level. Install any `log` backend to see it.
//!
//! ## Concurrency
//!
//! Streams are synchronous and single-owner. Nothing guards against two
//! processes writing the same base path at once.
//!
//! ## Minimum Supported Rust Version (MSRV)
//!
//! This crate requires **Rust 1.85** or later.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod part;

pub use error::{Error, Result};

// Re-export the multi-part API at crate root for convenience
pub use part::{
    ConcatReader, MultiPartFile, MultiPartFileStream, PartConfig, PartDescriptor, PartFactory,
    SplitWriter, find_parts, verify_contiguous,
};
