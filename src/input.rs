//! Reading and writing the translation table being patched.

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// Read the whole document at `path`.
///
/// # Errors
///
/// Returns [`Error::SourceFileMissing`] if the file cannot be opened.
pub fn read_document(path: &Path) -> Result<String> {
    let document = fs::read_to_string(path).map_err(|source| Error::SourceFileMissing {
        path: path.to_path_buf(),
        source,
    })?;
    info!("read {} ({} characters)", path.display(), document.chars().count());
    Ok(document)
}

/// Overwrite the document at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_document(path: &Path, document: &str) -> io::Result<()> {
    fs::write(path, document)?;
    info!("saved {}", path.display());
    Ok(())
}

#[must_use]
/// Human-readable size change between two documents, in characters.
pub fn size_delta(before: &str, after: &str) -> String {
    let before = before.chars().count();
    let after = after.chars().count();
    let delta = if after >= before {
        format!("+{}", after - before)
    } else {
        format!("-{}", before - after)
    };
    format!("{after} characters (\u{394} {delta})")
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
