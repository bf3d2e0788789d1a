//! Enumeration of bundled declaration library files.
//!
//! [`library_files_in`] lists the `lib.<name>.d.ts` files directly inside a
//! directory, sorted by file name, so the `--library` vocabulary (and the alias
//! list quoted in diagnostics) is deterministic across platforms.
//!
//! Symlinks are not followed; a symlinked declaration file is skipped just as
//! `walkdir` reports it, with a symlink `file_type()`.

use std::path::Path;

use anyhow::Context;
use walkdir::WalkDir;

use crate::options::registry::library_alias;

/// File names of the declaration libraries found directly in `dir`.
///
/// Subdirectories are not descended into. Returns an error when `dir` or one
/// of its entries cannot be read.
pub fn library_files_in(dir: &Path) -> anyhow::Result<Vec<String>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.with_context(|| format!("cannot read library directory {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if library_alias(name).is_some() {
            files.push(name.to_owned());
        }
    }
    Ok(files)
}
