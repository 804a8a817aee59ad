//! Host capabilities the core depends on, as narrow injected contracts.
//! Production runs on the std file system, the system clipboard, and a
//! stdio message surface; tests substitute in-memory implementations.

use crate::bridge::protocol::Response;
use crate::core::{aggregator, catalog, reader};
use crate::domain::errors::{FileSystemError, PersistenceError};
use crate::domain::models::{FileEntry, SavedArtifact};
use log::debug;
use std::io::{self, BufRead, Write};
use std::path::Path;

pub trait FileSystemPort {
    fn list(&self, root: Option<&Path>) -> Result<Vec<FileEntry>, FileSystemError>;
    fn read(&self, root: &Path, relative_path: &str) -> String;
    fn write(&self, root: &Path, content: &str) -> Result<SavedArtifact, PersistenceError>;
}

pub struct StdFileSystem;

impl FileSystemPort for StdFileSystem {
    fn list(&self, root: Option<&Path>) -> Result<Vec<FileEntry>, FileSystemError> {
        catalog::list_text_files_opt(root)
    }

    fn read(&self, root: &Path, relative_path: &str) -> String {
        reader::read_file_content(root, relative_path)
    }

    fn write(&self, root: &Path, content: &str) -> Result<SavedArtifact, PersistenceError> {
        aggregator::save_aggregate(root, content)
    }
}

pub trait ClipboardPort {
    fn write(&self, content: &str) -> anyhow::Result<()>;
}

pub struct SystemClipboard;

#[cfg(feature = "clipboard-support")]
impl ClipboardPort for SystemClipboard {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        use clipboard::{ClipboardContext, ClipboardProvider};
        use log::warn;

        debug!("Writing {} bytes to clipboard", content.len());
        let mut ctx: ClipboardContext = match ClipboardProvider::new() {
            Ok(ctx) => ctx,
            Err(e) => {
                warn!("Failed to access clipboard: {}", e);
                return Err(anyhow::anyhow!("Failed to access clipboard: {}", e));
            }
        };

        match ctx.set_contents(content.to_owned()) {
            Ok(_) => Ok(()),
            Err(e) => {
                warn!("Failed to copy to clipboard: {}", e);
                Err(anyhow::anyhow!("Failed to copy to clipboard: {}", e))
            }
        }
    }
}

#[cfg(not(feature = "clipboard-support"))]
impl ClipboardPort for SystemClipboard {
    fn write(&self, _content: &str) -> anyhow::Result<()> {
        Err(anyhow::anyhow!(
            "clipboard support was not compiled in (enable the clipboard-support feature)"
        ))
    }
}

/// The message channel to whatever surface drives this tool. Messages are
/// newline-delimited JSON; `next_message` returns `None` once the peer
/// closes the channel.
pub trait UiSurfacePort {
    fn post_message(&mut self, response: &Response) -> anyhow::Result<()>;
    fn next_message(&mut self) -> anyhow::Result<Option<String>>;
}

pub struct StdioSurface;

impl UiSurfacePort for StdioSurface {
    fn post_message(&mut self, response: &Response) -> anyhow::Result<()> {
        let mut stdout = io::stdout().lock();
        serde_json::to_writer(&mut stdout, response)?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(())
    }

    fn next_message(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            debug!("UI surface channel closed");
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_std_file_system_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("note.md"), "hello").unwrap();

        let fs_port = StdFileSystem;

        let entries = fs_port.list(Some(root)).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].relative_path, "note.md");

        assert_eq!(fs_port.read(root, "note.md"), "hello");

        let artifact = fs_port.write(root, "combined").unwrap();
        assert_eq!(std::fs::read_to_string(&artifact.path).unwrap(), "combined");
    }

    #[test]
    fn test_std_file_system_list_without_root() {
        let fs_port = StdFileSystem;
        assert!(fs_port.list(None).unwrap().is_empty());
    }
}
