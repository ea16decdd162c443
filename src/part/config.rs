//! Configuration for multi-part write sessions.

use std::path::{Path, PathBuf};

use super::PartDescriptor;
use crate::{Error, Result};

/// Where a write session puts its parts and how large each may grow.
///
/// ```rust
/// use partfile::PartConfig;
///
/// let config = PartConfig::new("backup.bin", 64 * 1024);
///
/// assert_eq!(config.part_path(1).to_str().unwrap(), "backup.bin");
/// assert_eq!(config.part_path(2).to_str().unwrap(), "backup.part2.bin");
/// ```
#[derive(Debug, Clone)]
pub struct PartConfig {
    /// Path of part 1.
    base_path: PathBuf,
    /// Per-file limit in bytes.
    part_size: u64,
}

impl PartConfig {
    /// Creates a configuration for parts of at most `part_size` bytes rooted
    /// at `base_path`. Call [`validate`](Self::validate) before use.
    pub fn new(base_path: impl AsRef<Path>, part_size: u64) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            part_size,
        }
    }

    /// Returns the path of part 1.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the per-file limit in bytes.
    pub fn part_size(&self) -> u64 {
        self.part_size
    }

    /// Returns the path part `part_number` is written to.
    ///
    /// Part 1 (and 0, which is treated as 1) is the base path itself; part
    /// `n` is `<prefix>.part<n>[.ext]` in the same directory.
    ///
    /// ```rust
    /// use partfile::PartConfig;
    ///
    /// let config = PartConfig::new("data.txt", 1024);
    /// assert_eq!(config.part_path(10).to_str().unwrap(), "data.part10.txt");
    /// ```
    pub fn part_path(&self, part_number: u64) -> PathBuf {
        if part_number <= 1 {
            return self.base_path.clone();
        }
        PartDescriptor::parse(&self.base_path).sibling_path(part_number)
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the per-file limit is zero.
    pub fn validate(&self) -> Result<()> {
        if self.part_size == 0 {
            return Err(Error::InvalidConfiguration(
                "per-file limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
