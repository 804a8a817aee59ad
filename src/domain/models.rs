use serde::Serialize;
use std::path::PathBuf;

/// One catalog entry: a workspace-relative path plus the resolved absolute
/// path. Built fresh on every scan, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    #[serde(rename = "path")]
    pub relative_path: String,
    #[serde(rename = "fullPath")]
    pub absolute_path: PathBuf,
}

/// Extensions treated as text. Extension match is case-insensitive, and a
/// file with no extension at all is also considered text.
pub const TEXT_EXTENSIONS: &[&str] = &[
    ".js", ".jsx", ".ts", ".tsx", ".json", ".html", ".css", ".scss", ".sass",
    ".md", ".txt", ".py", ".java", ".c", ".cpp", ".h", ".cs", ".php", ".rb",
    ".go", ".rs", ".swift", ".kt", ".dart", ".vue", ".svelte", ".xml", ".yaml",
    ".yml", ".toml", ".ini", ".cfg", ".conf", ".sh", ".bash", ".sql", ".r",
    ".m", ".scala", ".clj", ".ex", ".exs", ".erl", ".hs", ".lua", ".pl", ".pm",
];

/// Directory names pruned from the scan. Matched as whole path segments, so
/// `node_modules/x.js` is excluded but `my_node_modules.js` is not.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", ".vscode", "out"];

pub fn is_text_file(relative_path: &str) -> bool {
    let file_name = relative_path.rsplit('/').next().unwrap_or(relative_path);
    match file_name.rsplit_once('.') {
        // A leading dot alone (e.g. `.gitignore`) is a hidden name, not an
        // extension.
        Some(("", _)) | None => true,
        Some((_, ext)) => {
            let ext = ext.to_lowercase();
            TEXT_EXTENSIONS.iter().any(|e| e[1..] == ext)
        }
    }
}

#[derive(Debug, Clone)]
pub struct CombineConfig {
    pub root_path: String,
    pub selected_files: Vec<String>,
    pub output_path: Option<String>,
    pub to_clipboard: bool,
    pub save_in_root: bool,
}

/// The timestamped file a save produces, owned by the user afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArtifact {
    pub file_name: String,
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_text_file_known_extensions() {
        assert!(is_text_file("src/app.ts"));
        assert!(is_text_file("lib/main.RS"));
        assert!(is_text_file("notes.md"));
        assert!(!is_text_file("build/out.bin"));
        assert!(!is_text_file("image.png"));
    }

    #[test]
    fn test_is_text_file_no_extension() {
        assert!(is_text_file("README"));
        assert!(is_text_file("docs/LICENSE"));
        assert!(is_text_file(".gitignore"));
    }
}
