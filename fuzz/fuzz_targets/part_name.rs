//! Fuzz target for PartDescriptor::parse with arbitrary file names.
//!
//! Run with: cargo +nightly fuzz run part_name
//!
//! Properties being tested:
//! - Parsing never panics and always yields a part number of at least 1
//! - The successor of a part stays in the same directory and family

#![no_main]

use libfuzzer_sys::fuzz_target;
use partfile::PartDescriptor;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
        return;
    }

    let path = Path::new("dir").join(name);
    let part = PartDescriptor::parse(&path);
    assert!(part.number() >= 1);

    let next_path = part.next_path();
    assert_eq!(next_path.parent(), Some(Path::new("dir")));

    // Names with line breaks fall outside the naming pattern.
    if name.contains('\n') || part.prefix().is_empty() {
        return;
    }

    let next = PartDescriptor::parse(&next_path);
    assert_eq!(next.number(), part.number().saturating_add(1));
    assert_eq!(next.prefix(), part.prefix());
    assert!(next.is_successor_of(&part) || part.number() == u64::MAX);
});
