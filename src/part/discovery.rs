//! Locating the existing parts of a logical file on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::PartDescriptor;
use crate::{Error, Result};

/// Finds the parts of the logical file whose base (first part) is `base_path`.
///
/// The containing directory is scanned for files whose names belong to the
/// same family as the base file and carry a higher part number. The result is
/// `base_path` itself followed by those files in ascending part order.
///
/// The returned paths are candidates: the base file does not have to exist,
/// and gaps in the numbering are not detected here. Use
/// [`verify_contiguous`] when the sequence must be complete.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be listed.
///
/// # Example
///
/// ```rust,no_run
/// use partfile::find_parts;
///
/// for path in find_parts("backup/data.bin")? {
///     println!("{}", path.display());
/// }
/// # Ok::<(), partfile::Error>(())
/// ```
pub fn find_parts(base_path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let base_path = base_path.as_ref();
    let base = PartDescriptor::parse(base_path).into_head();
    let base_name = base_path.file_name();

    let dir = base_path.parent().unwrap_or(Path::new(""));
    let listing = if dir.as_os_str().is_empty() {
        fs::read_dir(".")
    } else {
        fs::read_dir(dir)
    };

    let entries = match listing {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Directory of {} does not exist", base_path.display());
            return Ok(vec![base_path.to_path_buf()]);
        }
        Err(e) => return Err(Error::Io(e)),
    };

    let mut successors = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        if Some(name.as_os_str()) == base_name {
            continue;
        }
        // Build from the directory as given so paths match the ones a write
        // session reports.
        let candidate_path = dir.join(&name);
        if !candidate_path.is_file() {
            continue;
        }
        let candidate = PartDescriptor::parse(&candidate_path);
        if candidate.is_successor_of(&base) {
            successors.push(candidate);
        }
    }

    successors.sort_by(|a, b| {
        a.number()
            .cmp(&b.number())
            .then_with(|| a.path().cmp(b.path()))
    });

    let mut parts = Vec::with_capacity(successors.len() + 1);
    parts.push(base_path.to_path_buf());
    parts.extend(successors.into_iter().map(|d| d.path().to_path_buf()));

    log::debug!(
        "Discovered {} part(s) for {}",
        parts.len(),
        base_path.display()
    );
    Ok(parts)
}

/// Checks that `parts` form an unbroken sequence `1, 2, 3, ...`.
///
/// The first path is treated as part 1 whatever its name; every following
/// path must carry exactly the next part number.
///
/// # Errors
///
/// Returns [`Error::PartMissing`] for the first number that is absent.
pub fn verify_contiguous(parts: &[PathBuf]) -> Result<()> {
    let Some(first) = parts.first() else {
        return Ok(());
    };
    let base = PartDescriptor::parse(first).into_head();

    let mut expected = 2u64;
    for path in &parts[1..] {
        let part = PartDescriptor::parse(path);
        if part.number() != expected {
            return Err(Error::PartMissing {
                number: expected,
                path: base.sibling_path(expected),
            });
        }
        expected += 1;
    }
    Ok(())
}
