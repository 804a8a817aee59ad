use crate::domain::errors::FileSystemError;
use crate::domain::models::{EXCLUDED_DIRS, FileEntry, is_text_file};
use log::{debug, info, warn};
use std::path::Path;

/// Scans the workspace for text-like files.
///
/// Excluded directories are pruned before descent, so nothing under
/// `node_modules`, `.git` and friends is ever visited. Each call re-scans
/// from scratch; the result reflects the file system at request time. No
/// ordering is guaranteed beyond walkdir's traversal order.
pub fn list_text_files(root: &Path) -> Result<Vec<FileEntry>, FileSystemError> {
    if !root.is_dir() {
        return Err(FileSystemError::InvalidRoot(root.display().to_string()));
    }

    info!("Listing text files in: {}", root.display());
    let mut result = Vec::new();

    for entry in walkdir::WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| {
            let is_excluded_dir = e.file_type().is_dir()
                && e.file_name()
                    .to_str()
                    .map(|name| EXCLUDED_DIRS.contains(&name))
                    .unwrap_or(false);
            !is_excluded_dir
        })
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(FileSystemError::EnumerationFailed(err.to_string()));
            }
            Err(err) => {
                // Unreadable subtree under a readable root: skip it and
                // keep the rest of the catalog.
                warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if entry.file_type().is_dir() || entry.file_type().is_symlink() {
            continue;
        }

        let path = entry.path();
        let relative_path = match path.strip_prefix(root) {
            Ok(rel) => rel.to_string_lossy().replace('\\', "/"),
            Err(_) => continue,
        };

        if is_text_file(&relative_path) {
            debug!("Found text file: {}", relative_path);
            result.push(FileEntry {
                relative_path,
                absolute_path: path.to_path_buf(),
            });
        }
    }

    info!("Found {} text files", result.len());
    Ok(result)
}

/// Catalog request when a workspace may or may not be open. No root means
/// an empty catalog, not an error.
pub fn list_text_files_opt(root: Option<&Path>) -> Result<Vec<FileEntry>, FileSystemError> {
    match root {
        Some(root) => list_text_files(root),
        None => {
            debug!("No workspace root open, returning empty catalog");
            Ok(Vec::new())
        }
    }
}
