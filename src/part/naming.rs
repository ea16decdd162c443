//! Part file naming convention.
//!
//! The first part of a logical file is the bare base file (`name.ext`); the
//! following parts are `name.part2.ext`, `name.part3.ext`, and so on. Part
//! numbers are not zero-padded. A legacy `of<N>` annotation after the number
//! (`name.part2 of 5.ext`) is accepted when parsing but never produced.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

static PART_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<prefix>.*?)(\.part(?P<number>[0-9]+)(\s?of\s?(?P<max>[0-9]+))?)?(\.(?P<ext>\w{3}))?$",
    )
    .expect("part name pattern is valid")
});

/// A parsed view of a part file path.
///
/// Parsing never fails: a name that does not follow the convention at all is
/// treated as a base file whose prefix is the whole file name.
///
/// # Example
///
/// ```rust
/// use partfile::PartDescriptor;
///
/// let part = PartDescriptor::parse("logs/app.part3.txt");
/// assert_eq!(part.prefix(), "app");
/// assert_eq!(part.number(), 3);
/// assert_eq!(part.extension(), Some("txt"));
/// assert_eq!(part.next_path(), std::path::Path::new("logs/app.part4.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartDescriptor {
    path: PathBuf,
    prefix: String,
    number: u64,
    max_parts: Option<u64>,
    extension: Option<String>,
}

impl PartDescriptor {
    /// Parses the file name of `path` into its part attributes.
    pub fn parse(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let Some(caps) = PART_NAME.captures(&name) else {
            // Only reachable for names containing a line break.
            return Self {
                path: path.to_path_buf(),
                prefix: name,
                number: 1,
                max_parts: None,
                extension: None,
            };
        };

        let number = caps
            .name("number")
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .filter(|&n| n >= 1);
        let prefix = match number {
            Some(_) => caps.name("prefix").map_or("", |m| m.as_str()).to_string(),
            // Zero or an overflowing number keeps the whole suffix in the prefix.
            None if caps.name("number").is_some() => {
                let end = caps.name("ext").map_or(name.len(), |m| m.start() - 1);
                name[..end].to_string()
            }
            None => caps.name("prefix").map_or("", |m| m.as_str()).to_string(),
        };

        Self {
            path: path.to_path_buf(),
            prefix,
            number: number.unwrap_or(1),
            max_parts: caps.name("max").and_then(|m| m.as_str().parse().ok()),
            extension: caps.name("ext").map(|m| m.as_str().to_string()),
        }
    }

    /// Returns the path this descriptor was parsed from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file name with part suffix and extension stripped.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the part number; 1 for a file without a `.partN` suffix.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Returns the three-character extension, if any.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Returns the legacy `of<N>` total, if the name carried one.
    ///
    /// This value plays no role in sequencing.
    pub fn max_parts(&self) -> Option<u64> {
        self.max_parts
    }

    /// Returns true if this file has no `.partN` suffix.
    pub fn is_base(&self) -> bool {
        self.number == 1
    }

    /// Returns true if `self` belongs to the same family as `base` and comes
    /// after it.
    ///
    /// This checks family membership only, not adjacency: `name.part5.txt` is
    /// a successor of `name.txt`.
    pub fn is_successor_of(&self, base: &PartDescriptor) -> bool {
        !base.prefix.is_empty() && self.prefix == base.prefix && self.number > base.number
    }

    /// Returns the path of the part that directly follows this one.
    ///
    /// The new path lives in the same directory and keeps the prefix and
    /// extension. Any legacy `of<N>` annotation is dropped.
    pub fn next_path(&self) -> PathBuf {
        self.sibling_path(self.number.saturating_add(1))
    }

    /// Returns the descriptor of the part that directly follows this one.
    pub fn next(&self) -> PartDescriptor {
        PartDescriptor::parse(self.next_path())
    }

    /// Returns the path of part `number` in this file's family.
    ///
    /// Part 1 is the bare `prefix[.ext]` name.
    pub fn sibling_path(&self, number: u64) -> PathBuf {
        let mut name = self.prefix.clone();
        if number > 1 {
            name.push_str(&format!(".part{}", number));
        }
        if let Some(ext) = &self.extension {
            name.push('.');
            name.push_str(ext);
        }
        match self.path.parent() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    /// Returns a copy that is treated as the head of its family (part 1),
    /// regardless of what its name says.
    pub(crate) fn into_head(mut self) -> Self {
        self.number = 1;
        self
    }
}
