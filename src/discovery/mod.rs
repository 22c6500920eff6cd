//! CSV file discovery

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ConversionError, ConversionResult};

/// Return true if the path is a file whose name ends with the literal,
/// case-sensitive suffix `.csv`.
pub fn is_csv_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(".csv"))
}

/// Find CSV files under `root`. If recursive is true, walk the whole
/// subtree; otherwise list direct children only.
///
/// The result is sorted lexicographically by path so batch output order does
/// not depend on the filesystem's directory listing order.
pub fn find_csv_files(root: &Path, recursive: bool) -> ConversionResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ConversionError::not_found(root.to_path_buf()));
    }

    let mut csv_files = Vec::new();

    if recursive {
        for entry in WalkDir::new(root) {
            let entry = entry?;
            let path = entry.path();
            if is_csv_file(path) {
                csv_files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(root)? {
            let entry = entry?;
            let path = entry.path();
            if is_csv_file(&path) {
                csv_files.push(path);
            }
        }
    }

    csv_files.sort();
    Ok(csv_files)
}
