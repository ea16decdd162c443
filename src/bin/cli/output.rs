//! Output formatting for CLI operations.

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

use partfile::{Error, verify_contiguous};

/// One part as shown to the user.
pub struct PartEntry {
    /// Position in the sequence (1-indexed).
    pub number: u64,
    pub path: PathBuf,
    /// Size on disk, `None` if the file does not exist.
    pub size: Option<u64>,
}

/// A set of parts plus what is known about its completeness.
pub struct PartListing {
    pub parts: Vec<PartEntry>,
    /// First missing part, if the sequence has a gap.
    pub missing: Option<(u64, PathBuf)>,
}

impl PartListing {
    /// Gathers sizes and the contiguity status for `paths`.
    pub fn collect(paths: &[PathBuf]) -> Self {
        let parts = paths
            .iter()
            .enumerate()
            .map(|(i, path)| PartEntry {
                number: i as u64 + 1,
                path: path.clone(),
                size: fs::metadata(path).ok().map(|m| m.len()),
            })
            .collect();

        let missing = match verify_contiguous(paths) {
            Err(Error::PartMissing { number, path }) => Some((number, path)),
            _ => None,
        };

        Self { parts, missing }
    }

    /// Returns the summed size of all existing parts.
    pub fn total_size(&self) -> u64 {
        self.parts.iter().filter_map(|p| p.size).sum()
    }

    /// Returns true if every part exists and there is no gap.
    pub fn is_complete(&self) -> bool {
        self.missing.is_none() && self.parts.iter().all(|p| p.size.is_some())
    }
}

/// Trait for output formatting
pub trait OutputFormatter {
    /// Formats a list of parts
    fn format_parts(&self, listing: &PartListing) -> String;

    /// Formats the result of joining parts
    fn format_join(&self, output: &Path, bytes: u64, part_count: usize) -> String;

    /// Formats the list of deleted files
    fn format_deleted(&self, deleted: &[PathBuf]) -> String;
}

/// Human-readable output formatter
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_parts(&self, listing: &PartListing) -> String {
        let mut output = String::new();

        output.push_str(&format!("{:>6} {:>12} {}\n", "Part", "Size", "Path"));
        output.push_str(&"-".repeat(70));
        output.push('\n');

        for part in &listing.parts {
            let size_str = part
                .size
                .map(humanize_bytes)
                .unwrap_or_else(|| "missing".to_string());
            output.push_str(&format!(
                "{:>6} {:>12} {}\n",
                part.number,
                size_str,
                part.path.display()
            ));
        }

        // Footer
        output.push_str(&"-".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "{} parts, {} total\n",
            listing.parts.len(),
            humanize_bytes(listing.total_size())
        ));
        if let Some((number, path)) = &listing.missing {
            output.push_str(&format!(
                "Warning: part {} is missing ({})\n",
                number,
                path.display()
            ));
        }

        output
    }

    fn format_join(&self, output: &Path, bytes: u64, part_count: usize) -> String {
        format!(
            "Joined {} parts into {} ({})\n",
            part_count,
            output.display(),
            humanize_bytes(bytes)
        )
    }

    fn format_deleted(&self, deleted: &[PathBuf]) -> String {
        let mut output = String::new();
        for path in deleted {
            output.push_str(&format!("Deleted {}\n", path.display()));
        }
        output.push_str(&format!("{} files deleted\n", deleted.len()));
        output
    }
}

/// JSON output formatter
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_parts(&self, listing: &PartListing) -> String {
        let obj = json!({
            "complete": listing.is_complete(),
            "total_size": listing.total_size(),
            "missing_part": listing.missing.as_ref().map(|(number, path)| json!({
                "number": number,
                "path": path.display().to_string(),
            })),
            "parts": listing.parts.iter().map(|p| json!({
                "number": p.number,
                "path": p.path.display().to_string(),
                "size": p.size,
            })).collect::<Vec<_>>(),
        });

        serde_json::to_string_pretty(&obj).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_join(&self, output: &Path, bytes: u64, part_count: usize) -> String {
        let obj = json!({
            "output": output.display().to_string(),
            "bytes_written": bytes,
            "part_count": part_count,
        });

        serde_json::to_string_pretty(&obj).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_deleted(&self, deleted: &[PathBuf]) -> String {
        let obj = json!({
            "deleted": deleted.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        });

        serde_json::to_string_pretty(&obj).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Creates the appropriate formatter based on output format
pub fn create_formatter(format: super::OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        super::OutputFormat::Human => Box::new(HumanFormatter),
        super::OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Converts bytes to a human-readable string
pub fn humanize_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Parses a size such as `512`, `64K`, `10M` or `4G` (binary units).
pub fn parse_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (digits, unit) = s.split_at(split);

    let value: u64 = digits
        .parse()
        .map_err(|_| format!("invalid size '{}'", s))?;
    let multiplier: u64 = match unit.trim().to_ascii_uppercase().as_str() {
        "" | "B" => 1,
        "K" | "KB" | "KIB" => 1024,
        "M" | "MB" | "MIB" => 1024 * 1024,
        "G" | "GB" | "GIB" => 1024 * 1024 * 1024,
        "T" | "TB" | "TIB" => 1024 * 1024 * 1024 * 1024,
        other => return Err(format!("unknown size unit '{}'", other)),
    };

    let size = value
        .checked_mul(multiplier)
        .ok_or_else(|| format!("size '{}' is too large", s))?;
    if size == 0 {
        return Err("size must be greater than zero".to_string());
    }
    Ok(size)
}
