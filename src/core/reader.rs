use log::{debug, warn};
use std::fs;
use std::path::{Component, Path};

/// Reads one selected file as UTF-8 text.
///
/// Never fails: a missing file, a permission error, invalid UTF-8, or a
/// path that would escape the workspace root all degrade to an inline
/// `[Error reading file: ...]` placeholder, so one bad file does not abort
/// a batch of reads.
pub fn read_file_content(root: &Path, relative_path: &str) -> String {
    match try_read(root, relative_path) {
        Ok(content) => {
            debug!("Read {} bytes from {}", content.len(), relative_path);
            content
        }
        Err(message) => {
            warn!("Error reading {}: {}", relative_path, message);
            format!("[Error reading file: {}]", message)
        }
    }
}

fn try_read(root: &Path, relative_path: &str) -> Result<String, String> {
    let rel = Path::new(relative_path);

    // Reject absolute paths and `..` segments before touching the disk.
    let escapes = rel.is_absolute()
        || rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(format!("path escapes workspace root: {}", relative_path));
    }

    let root = root.canonicalize().map_err(|e| e.to_string())?;
    let resolved = root.join(rel).canonicalize().map_err(|e| e.to_string())?;

    // Symlinks can still point outside the root, so check the resolved path.
    if !resolved.starts_with(&root) {
        return Err(format!("path escapes workspace root: {}", relative_path));
    }

    fs::read_to_string(&resolved).map_err(|e| e.to_string())
}
