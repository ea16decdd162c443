//! Command implementations for the CLI tool.

use std::path::{Path, PathBuf};

use partfile::{MultiPartFile, find_parts};

use crate::OutputFormat;
use crate::exit_codes::{ExitCode, error_to_exit_code};
use crate::output::{PartListing, create_formatter};

/// Split command implementation
pub fn split(
    input: &Path,
    output_base: &Path,
    part_size: u64,
    format: OutputFormat,
    quiet: bool,
) -> ExitCode {
    let formatter = create_formatter(format);

    let parts = match MultiPartFile::split_file(input, output_base, part_size) {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("Error splitting {}: {}", input.display(), e);
            return error_to_exit_code(&e);
        }
    };

    if !quiet {
        print!("{}", formatter.format_parts(&PartListing::collect(&parts)));
    }

    ExitCode::Success
}

/// Join command implementation
///
/// A single path is treated as a base file whose parts are discovered; more
/// paths are joined in the order given.
pub fn join(parts: &[PathBuf], output: &Path, format: OutputFormat, quiet: bool) -> ExitCode {
    let formatter = create_formatter(format);

    let multipart = match parts {
        [] => {
            eprintln!("Error: No parts to join");
            return ExitCode::BadArgs;
        }
        [base] => match MultiPartFile::discover(base) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Error: {}", e);
                return error_to_exit_code(&e);
            }
        },
        _ => MultiPartFile::from_files(parts),
    };

    let part_count = multipart.files().len();
    match multipart.join_into(output) {
        Ok(bytes) => {
            if !quiet {
                print!("{}", formatter.format_join(output, bytes, part_count));
            }
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error joining parts: {}", e);
            error_to_exit_code(&e)
        }
    }
}

/// List command implementation
pub fn list(base: &Path, format: OutputFormat) -> ExitCode {
    let formatter = create_formatter(format);

    let parts = match find_parts(base) {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("Error: {}", e);
            return error_to_exit_code(&e);
        }
    };

    let listing = PartListing::collect(&parts);
    print!("{}", formatter.format_parts(&listing));

    if listing.is_complete() {
        ExitCode::Success
    } else {
        ExitCode::BrokenParts
    }
}

/// Delete command implementation
pub fn delete(base: &Path, format: OutputFormat, quiet: bool) -> ExitCode {
    let formatter = create_formatter(format);

    match MultiPartFile::delete(base) {
        Ok(deleted) => {
            if !quiet {
                print!("{}", formatter.format_deleted(&deleted));
            }
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error deleting {}: {}", base.display(), e);
            error_to_exit_code(&e)
        }
    }
}
