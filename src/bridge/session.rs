//! Per-request dispatch for the UI surface channel. A session holds only
//! the workspace root and the injected host ports; every request is served
//! against the live file system with no state carried between requests.

use crate::bridge::protocol::{Request, Response};
use crate::infra::ports::{ClipboardPort, FileSystemPort, UiSurfacePort};
use log::{debug, info};
use std::path::{Path, PathBuf};

pub struct Session<'a> {
    root: Option<PathBuf>,
    fs: &'a dyn FileSystemPort,
    clipboard: &'a dyn ClipboardPort,
}

impl<'a> Session<'a> {
    pub fn new(
        root: Option<PathBuf>,
        fs: &'a dyn FileSystemPort,
        clipboard: &'a dyn ClipboardPort,
    ) -> Self {
        Session {
            root,
            fs,
            clipboard,
        }
    }

    fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Handles one request. `None` means no response is owed (a content
    /// request with no workspace open).
    pub fn handle(&self, request: Request) -> Option<Response> {
        match request {
            Request::GetFiles => Some(self.file_list()),
            Request::ReadFile { path } => {
                let root = self.root()?;
                let content = self.fs.read(root, &path);
                Some(Response::FileContent { path, content })
            }
            Request::SaveFile { content } => Some(self.save(&content)),
            Request::CopyToClipboard { content } => Some(match self.clipboard.write(&content) {
                Ok(()) => Response::Notice {
                    message: "Content copied to clipboard!".to_string(),
                },
                Err(e) => Response::Error {
                    message: e.to_string(),
                },
            }),
        }
    }

    fn file_list(&self) -> Response {
        match self.fs.list(self.root()) {
            Ok(files) => Response::FileList { files },
            Err(e) => Response::Error {
                message: format!("Failed to load files: {}", e),
            },
        }
    }

    fn save(&self, content: &str) -> Response {
        let Some(root) = self.root() else {
            return Response::Error {
                message: "No workspace folder open".to_string(),
            };
        };
        match self.fs.write(root, content) {
            Ok(artifact) => Response::Notice {
                message: format!("Saved to {}", artifact.file_name),
            },
            Err(e) => Response::Error {
                message: e.to_string(),
            },
        }
    }
}

/// Runs the request/response loop until the surface closes its channel.
/// An initial file list is posted unprompted, so a freshly attached surface
/// has something to show. Lines that do not parse as a known request are
/// dropped without a reply.
pub fn serve(session: &Session, surface: &mut dyn UiSurfacePort) -> anyhow::Result<()> {
    info!("UI surface session started");

    surface.post_message(&session.file_list())?;

    while let Some(line) = surface.next_message()? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let request = match serde_json::from_str::<Request>(line) {
            Ok(request) => request,
            Err(e) => {
                debug!("Ignoring unrecognized message: {}", e);
                continue;
            }
        };

        if let Some(response) = session.handle(request) {
            surface.post_message(&response)?;
        }
    }

    info!("UI surface session ended");
    Ok(())
}
