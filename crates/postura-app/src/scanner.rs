//! Point-file scanning and validation

use postura_types::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension the marking UI saves point files with
const POINT_FILE_EXTENSION: &str = "json";

/// Check if a path looks like a marked-photo point file
pub fn is_point_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(POINT_FILE_EXTENSION))
        .unwrap_or(false)
}

/// Validate a point file exists and carries the right extension
pub fn validate_points_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    if !path.is_file() {
        return Err(Error::InvalidMarkedPhoto(format!(
            "{} is not a file",
            path.display()
        )));
    }

    if !is_point_file(path) {
        return Err(Error::InvalidMarkedPhoto(format!(
            "{} is not a .json point file",
            path.display()
        )));
    }

    Ok(())
}

/// Scan a directory for point files
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(Error::FileNotFound(dir.display().to_string()));
    }

    if !dir.is_dir() {
        return Err(Error::InvalidMarkedPhoto(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && is_point_file(path) {
            files.push(path.to_path_buf());
        }
    }

    // Sort by filename for consistent ordering
    files.sort_by(|a, b| {
        a.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .cmp(b.file_name().and_then(|n| n.to_str()).unwrap_or(""))
    });

    Ok(files)
}
