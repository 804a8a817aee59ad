use crate::core::reader::read_file_content;
use crate::domain::errors::PersistenceError;
use crate::domain::models::SavedArtifact;
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Combines the selected files, in the order given, into one text blob with
/// a `=== <path> ===` header above each file. Unreadable files show up as
/// their inline error placeholder rather than aborting the batch.
pub fn compose(root: &Path, selected: &[String]) -> String {
    debug!("Composing aggregate from {} files", selected.len());
    let mut combined = String::new();

    for relative_path in selected {
        let content = read_file_content(root, relative_path);
        combined.push_str(&format!("=== {} ===\n{}\n\n", relative_path, content));
    }

    combined
}

/// `context_<timestamp>.txt`, second granularity, UTC. Colons and dots in
/// the ISO form are replaced so the name is valid on every file system.
pub fn artifact_file_name(now: DateTime<Utc>) -> String {
    format!("context_{}.txt", now.format("%Y-%m-%dT%H-%M-%S"))
}

/// Writes the caller-supplied text verbatim to a timestamped file in the
/// workspace root. Two saves within the same second hit the same name and
/// the later write wins; the timestamp carries no sub-second precision.
pub fn save_aggregate(root: &Path, content: &str) -> Result<SavedArtifact, PersistenceError> {
    let file_name = artifact_file_name(Utc::now());
    let path = root.join(&file_name);

    fs::write(&path, content)?;
    info!("Saved aggregate to {}", path.display());

    Ok(SavedArtifact { file_name, path })
}
