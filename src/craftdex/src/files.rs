//! File system helpers for asset trees

use std::path::{Path, PathBuf};

/// Walk files under `root` whose extension matches, in sorted path order.
///
/// Unreadable entries are skipped. Extension is given without the dot.
pub fn walk_files_with_extension<F>(root: &Path, extension: &str, mut handler: F)
where
    F: FnMut(&Path, &Path),
{
    for entry in walkdir::WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));

        if matches {
            let relative = path.strip_prefix(root).unwrap_or(path);
            handler(path, relative);
        }
    }
}

/// Files under `root` with the extension, as (absolute, relative) pairs
pub fn collect_files_with_extension(root: &Path, extension: &str) -> Vec<(PathBuf, PathBuf)> {
    let mut files = Vec::new();
    walk_files_with_extension(root, extension, |path, relative| {
        files.push((path.to_path_buf(), relative.to_path_buf()));
    });
    files
}

/// `planks/oak.json` -> `planks/oak`, always with forward slashes
pub fn resource_path(relative: &Path) -> String {
    let without_ext = relative.with_extension("");
    without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Names of the immediate subdirectories of `path`
pub fn subdir_names(path: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

/// First of `candidates` that exists
pub fn first_existing(candidates: &[PathBuf]) -> Option<&Path> {
    candidates
        .iter()
        .find(|p| p.exists())
        .map(PathBuf::as_path)
}
