//! Shared test utilities for integration tests.
//!
//! Note: `#![allow(dead_code)]` is required because each integration test file
//! compiles as a separate crate and may only use a subset of these helpers.

#![allow(dead_code)]

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use partfile::MultiPartFile;

/// Content used by most scenarios: a prefix plus the numbers 1..=100.
pub fn sample_content() -> String {
    let numbers: String = (1..=100).map(|i| i.to_string()).collect();
    format!("Some dummy content for file to write: {}", numbers)
}

/// A 100-character string.
pub fn hundred_chars() -> String {
    "0123456789".repeat(10)
}

/// Writes `data` through a write session and returns the created parts.
pub fn write_parts(base: &Path, limit: u64, data: &[u8]) -> Vec<PathBuf> {
    let mut stream = MultiPartFile::create(base, limit).expect("Failed to create stream");
    stream.write_all(data).expect("Failed to write");
    stream.flush().expect("Failed to flush");
    stream.finish().expect("Failed to finish")
}

/// Reads the logical file rooted at `base` back through a read session.
pub fn read_parts(base: &Path) -> (Vec<u8>, Vec<PathBuf>) {
    let mut stream = MultiPartFile::open_read(base).expect("Failed to open for reading");
    let mut data = Vec::new();
    stream.read_to_end(&mut data).expect("Failed to read");
    let files = stream.files().to_vec();
    (data, files)
}

/// Concatenates the raw contents of `files`, in order.
pub fn concat_files(files: &[PathBuf]) -> Vec<u8> {
    files
        .iter()
        .flat_map(|f| fs::read(f).expect("Failed to read part"))
        .collect()
}

/// Extracts the `.partN` number from a path, or 1 for the base file.
pub fn part_number(path: &Path) -> u64 {
    let name = path.file_name().unwrap().to_string_lossy();
    name.find(".part")
        .and_then(|pos| {
            let digits: String = name[pos + 5..]
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().ok()
        })
        .unwrap_or(1)
}

/// Random data (deterministically seeded for reproducibility).
pub fn random_data(len: usize) -> Vec<u8> {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(0x5EED_0F_9A27);
    let mut data = vec![0u8; len];
    rng.fill(&mut data[..]);
    data
}
