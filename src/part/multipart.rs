//! Opening, creating and deleting multi-part files.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::discovery::find_parts;
use super::writer::{PartFactory, SplitWriter};
use super::{ConcatReader, MultiPartFileStream, PartConfig, PartDescriptor};
use crate::{Error, Result};

/// The ordered set of physical files behind one logical file.
///
/// For reading, the set is resolved once (by discovery or from an explicit
/// list). For writing, it starts empty and grows by one path each time a new
/// part is actually created, so it never names a file that was not opened.
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{Read, Write};
/// use partfile::MultiPartFile;
///
/// let mut stream = MultiPartFile::create("out/data.txt", 10)?;
/// stream.write_all(b"a logical stream longer than ten bytes")?;
/// let written = stream.finish()?;
///
/// let mut stream = MultiPartFile::open_read("out/data.txt")?;
/// let mut text = String::new();
/// stream.read_to_string(&mut text)?;
/// assert_eq!(stream.files(), &written[..]);
/// # Ok::<(), partfile::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MultiPartFile {
    /// Part paths in ascending part order.
    files: Vec<PathBuf>,
    /// Path of part 1.
    base_path: PathBuf,
    /// The most recently created part of a write session.
    last_written: Option<PartDescriptor>,
}

impl MultiPartFile {
    /// Resolves the parts of an existing logical file from its base path.
    ///
    /// # Errors
    ///
    /// Returns an error if the containing directory cannot be listed.
    pub fn discover(base_path: impl AsRef<Path>) -> Result<Self> {
        let base_path = base_path.as_ref();
        Ok(Self {
            files: find_parts(base_path)?,
            base_path: base_path.to_path_buf(),
            last_written: None,
        })
    }

    /// Uses an explicit, caller-ordered list of files.
    ///
    /// The files do not need to follow the part naming convention.
    pub fn from_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let files: Vec<PathBuf> = files
            .into_iter()
            .map(|p| p.as_ref().to_path_buf())
            .collect();
        let base_path = files.first().cloned().unwrap_or_default();
        Self {
            files,
            base_path,
            last_written: None,
        }
    }

    /// Starts an empty write session rooted at `base_path`.
    ///
    /// Nothing is created on disk until [`open_next_file`](Self::open_next_file)
    /// is called.
    pub fn for_writing(base_path: impl AsRef<Path>) -> Self {
        Self {
            files: Vec::new(),
            base_path: base_path.as_ref().to_path_buf(),
            last_written: None,
        }
    }

    /// Returns the part paths in order.
    ///
    /// During a write session this grows as parts are created.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Returns the path of the first part.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Creates the next part of a write session.
    ///
    /// The first call creates the base file; each later call creates the part
    /// that follows the previously created one. The new path is recorded
    /// before the handle is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn open_next_file(&mut self) -> Result<BufWriter<File>> {
        let part = match &self.last_written {
            None => PartDescriptor::parse(&self.base_path).into_head(),
            Some(last) => last.next(),
        };

        let path = part.path();
        let file = File::create(path).map_err(|e| {
            Error::Io(io::Error::new(
                e.kind(),
                format!("Failed to create part {}: {}", path.display(), e),
            ))
        })?;
        log::debug!("Created part {}: {}", part.number(), path.display());

        self.files.push(path.to_path_buf());
        self.last_written = Some(part);
        Ok(BufWriter::new(file))
    }

    /// Removes parts left behind by an earlier, longer write to the same base
    /// path.
    ///
    /// Every discovered successor numbered after the last part created by
    /// this session is deleted, so the set on disk matches [`files`](Self::files).
    /// A session that created no part leaves the directory untouched.
    pub(crate) fn remove_stale_parts(&self) -> Result<Vec<PathBuf>> {
        let Some(last) = &self.last_written else {
            return Ok(Vec::new());
        };

        let mut removed = Vec::new();
        for path in find_parts(&self.base_path)?.into_iter().skip(1) {
            if PartDescriptor::parse(&path).number() <= last.number() {
                continue;
            }
            match fs::remove_file(&path) {
                Ok(()) => {
                    log::debug!("Removed stale part: {}", path.display());
                    removed.push(path);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(Error::Io(e)),
            }
        }
        Ok(removed)
    }

    /// Opens every part for reading, in order.
    fn open_parts(&self) -> Result<Vec<BufReader<File>>> {
        self.files
            .iter()
            .map(|path| {
                let file = File::open(path).map_err(|e| {
                    Error::Io(io::Error::new(
                        e.kind(),
                        format!("Failed to open part {}: {}", path.display(), e),
                    ))
                })?;
                log::debug!("Opened part for reading: {}", path.display());
                Ok(BufReader::new(file))
            })
            .collect()
    }

    fn into_read_stream(self) -> Result<MultiPartFileStream> {
        let reader = ConcatReader::new(self.open_parts()?);
        Ok(MultiPartFileStream::reading(self, reader))
    }

    /// Opens a logical file for reading, discovering its parts from the base
    /// path.
    ///
    /// All parts are opened up front.
    ///
    /// # Errors
    ///
    /// Returns an error if a part (including the base file) cannot be opened.
    pub fn open_read(base_path: impl AsRef<Path>) -> Result<MultiPartFileStream> {
        Self::discover(base_path)?.into_read_stream()
    }

    /// Opens an explicit list of files as one logical stream, in list order.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the files cannot be opened.
    pub fn open_read_files<I, P>(files: I) -> Result<MultiPartFileStream>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self::from_files(files).into_read_stream()
    }

    /// Opens a write session that splits into parts of at most
    /// `per_file_limit` bytes.
    ///
    /// Existing files at the part paths are overwritten. When the session is
    /// closed with [`MultiPartFileStream::finish`], parts of an earlier,
    /// longer set that were not rewritten are removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `per_file_limit` is zero.
    pub fn create(
        base_path: impl AsRef<Path>,
        per_file_limit: u64,
    ) -> Result<MultiPartFileStream> {
        Self::create_with(PartConfig::new(base_path, per_file_limit))
    }

    /// Opens a write session from a [`PartConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the configuration is invalid.
    pub fn create_with(config: PartConfig) -> Result<MultiPartFileStream> {
        config.validate()?;
        let parts = Self::for_writing(config.base_path());
        let writer = SplitWriter::new(config.part_size(), parts)?;
        Ok(MultiPartFileStream::writing(writer))
    }

    /// Deletes the base file and its sequential successors.
    ///
    /// Deletion walks `base`, `.part2`, `.part3`, ... and stops at the first
    /// name that does not exist. Parts after a gap are left on disk. Calling
    /// this on an already-deleted file is a no-op.
    ///
    /// Returns the paths that were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing part cannot be removed.
    pub fn delete(base_path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let mut deleted = Vec::new();
        let mut part = PartDescriptor::parse(base_path).into_head();

        loop {
            match fs::remove_file(part.path()) {
                Ok(()) => {
                    log::debug!(
                        "Deleted part {}: {}",
                        part.number(),
                        part.path().display()
                    );
                    deleted.push(part.path().to_path_buf());
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => break,
                Err(e) => return Err(Error::Io(e)),
            }
            part = part.next();
        }

        Ok(deleted)
    }

    /// Copies `input_path` into a fresh multi-part file at `output_base_path`.
    ///
    /// At least one part is always created, even for an empty input. Any
    /// older parts beyond the new last part are removed, so the result is a
    /// fresh sequence. Returns the created part paths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `per_file_limit` is zero, or
    /// an I/O error if reading or writing fails. Parts written before a
    /// failure are not removed.
    pub fn split_file(
        input_path: impl AsRef<Path>,
        output_base_path: impl AsRef<Path>,
        per_file_limit: u64,
    ) -> Result<Vec<PathBuf>> {
        let mut stream = Self::create(output_base_path, per_file_limit)?;
        let mut input = BufReader::new(File::open(input_path)?);

        stream.begin()?;
        io::copy(&mut input, &mut stream)?;
        stream.finish()
    }

    /// Concatenates the parts of `base_path` into a single `output_path`.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the output would overwrite
    /// one of the parts, or an I/O error if reading or writing fails.
    pub fn join_files(base_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<u64> {
        let parts = Self::discover(base_path)?;
        parts.join_into(output_path)
    }

    /// Concatenates these parts into a single `output_path`.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Same as [`join_files`](Self::join_files).
    pub fn join_into(self, output_path: impl AsRef<Path>) -> Result<u64> {
        let output_path = output_path.as_ref();
        if self.files.iter().any(|p| p == output_path) {
            return Err(Error::InvalidConfiguration(format!(
                "output {} is one of the parts being joined",
                output_path.display()
            )));
        }

        let mut reader = self.into_read_stream()?;
        let mut output = BufWriter::new(File::create(output_path)?);
        let copied = io::copy(&mut reader, &mut output)?;
        output.flush()?;
        Ok(copied)
    }
}

impl PartFactory for MultiPartFile {
    type Part = BufWriter<File>;

    fn open_next(&mut self) -> Result<BufWriter<File>> {
        self.open_next_file()
    }
}
