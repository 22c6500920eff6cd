use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Map a CSV file onto its JSON destination: same directory, same stem, the
/// trailing `.csv` suffix replaced by `.json`.
pub fn json_destination(csv_path: &Path) -> PathBuf {
    let stripped = csv_path
        .file_name()
        .and_then(OsStr::to_str)
        .and_then(|name| name.strip_suffix(".csv"));

    match stripped {
        Some(stem) => csv_path.with_file_name(format!("{}.json", stem)),
        None => csv_path.with_extension("json"),
    }
}
