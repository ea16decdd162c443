//! Multi-part file support.
//!
//! This module stores one logical byte stream as a sequence of size-bounded
//! files on disk and reads such a sequence back as one continuous stream.
//!
//! # Overview
//!
//! Splitting a stream into parts is useful for:
//! - Storing large files on media or file systems with size limits
//! - Moving data through transports that cap the size of a single file
//!
//! # Writing
//!
//! ```rust,no_run
//! use std::io::Write;
//! use partfile::MultiPartFile;
//!
//! // At most 40 bytes per part
//! let mut stream = MultiPartFile::create("someTextFile.txt", 40)?;
//! stream.write_all(b"This content will be saved to multiple files")?;
//! for path in stream.finish()? {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), partfile::Error>(())
//! ```
//!
//! # Reading
//!
//! ```rust,no_run
//! use std::io::Read;
//! use partfile::MultiPartFile;
//!
//! // Other parts are discovered automatically
//! let mut stream = MultiPartFile::open_read("someTextFile.txt")?;
//! let mut content = String::new();
//! stream.read_to_string(&mut content)?;
//! println!("Read from {} parts", stream.files().len());
//! # Ok::<(), partfile::Error>(())
//! ```
//!
//! # Part Naming Convention
//!
//! - `name.ext` - First part (the base file)
//! - `name.part2.ext` - Second part
//! - `name.part3.ext` - Third part
//! - etc.
//!
//! Part numbers are not padded. Only three-character extensions are kept
//! after the part suffix; other names get the suffix appended at the end
//! (`data.gz` → `data.gz.part2`).

mod config;
mod discovery;
mod multipart;
mod naming;
mod reader;
mod stream;
mod writer;

pub use config::PartConfig;
pub use discovery::{find_parts, verify_contiguous};
pub use multipart::MultiPartFile;
pub use naming::PartDescriptor;
pub use reader::ConcatReader;
pub use stream::MultiPartFileStream;
pub use writer::{PartFactory, SplitWriter};
