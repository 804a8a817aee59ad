//! Wire types for the UI surface channel. Every message carries a `type`
//! discriminator; a message whose `type` has no handler is dropped without
//! an error response.

use crate::domain::models::FileEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Request {
    GetFiles,
    ReadFile { path: String },
    SaveFile { content: String },
    CopyToClipboard { content: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Response {
    FileList {
        files: Vec<FileEntry>,
    },
    FileContent {
        path: String,
        content: String,
    },
    /// Host notification shown to the user ("Saved to ...", "copied").
    Notice {
        message: String,
    },
    Error {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_request_wire_shapes() {
        let request: Request = serde_json::from_str(r#"{"type":"getFiles"}"#).unwrap();
        assert!(matches!(request, Request::GetFiles));

        let request: Request =
            serde_json::from_str(r#"{"type":"readFile","path":"src/app.ts"}"#).unwrap();
        match request {
            Request::ReadFile { path } => assert_eq!(path, "src/app.ts"),
            other => panic!("unexpected request: {:?}", other),
        }

        let request: Request =
            serde_json::from_str(r#"{"type":"copyToClipboard","content":"hello"}"#).unwrap();
        assert!(matches!(request, Request::CopyToClipboard { .. }));
    }

    #[test]
    fn test_unknown_type_fails_to_parse() {
        let result = serde_json::from_str::<Request>(r#"{"type":"openSettings"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_file_list_response_shape() {
        let response = Response::FileList {
            files: vec![FileEntry {
                relative_path: "src/app.ts".to_string(),
                absolute_path: PathBuf::from("/ws/src/app.ts"),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "fileList");
        assert_eq!(json["files"][0]["path"], "src/app.ts");
        assert_eq!(json["files"][0]["fullPath"], "/ws/src/app.ts");
    }

    #[test]
    fn test_file_content_response_shape() {
        let response = Response::FileContent {
            path: "a.md".to_string(),
            content: "# A".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "fileContent");
        assert_eq!(json["path"], "a.md");
        assert_eq!(json["content"], "# A");
    }
}
