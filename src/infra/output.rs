use crate::infra::ports::ClipboardPort;
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub trait OutputWriter {
    fn write(&self, content: &str) -> anyhow::Result<()>;
}

pub struct FileWriter {
    path: String,
}

impl FileWriter {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing output to file: {}", self.path);
        fs::write(Path::new(&self.path), content)?;
        info!("Output written to file: {}", self.path);
        Ok(())
    }
}

pub struct ConsoleWriter;

impl OutputWriter for ConsoleWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing output to console");
        io::stdout().write_all(content.as_bytes())?;
        io::stdout().write_all(b"\n")?;
        Ok(())
    }
}

pub fn write_output(
    content: &str,
    output_path: Option<String>,
    to_clipboard: bool,
    clipboard: &dyn ClipboardPort,
) -> anyhow::Result<()> {
    if to_clipboard {
        clipboard.write(content)?;
        info!("Output copied to clipboard (size: {} bytes)", content.len());
        notify_copied(content)?;
        return Ok(());
    }

    let writer: Box<dyn OutputWriter> = match output_path {
        Some(path) => Box::new(FileWriter::new(path)),
        None => Box::new(ConsoleWriter),
    };
    writer.write(content)
}

fn notify_copied(content: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    stdout.execute(SetForegroundColor(Color::Green))?;
    writeln!(stdout, "\n📋 Content copied to clipboard!")?;
    stdout.execute(ResetColor)?;

    writeln!(stdout, "\nPreview of copied content:\n")?;

    let preview_length = 200;
    let preview = if content.chars().count() > preview_length {
        let safe_substring: String = content.chars().take(preview_length).collect();
        format!("{}...", safe_substring)
    } else {
        content.to_string()
    };

    writeln!(stdout, "{}", preview)?;
    Ok(())
}

pub fn notify_saved(file_name: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    stdout.execute(SetForegroundColor(Color::Green))?;
    writeln!(stdout, "Saved to {}", file_name)?;
    stdout.execute(ResetColor)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_writer() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_string_lossy().to_string();
        let writer = FileWriter::new(path.clone());
        let content = "Test output";

        writer.write(content).unwrap();

        let read_content = fs::read_to_string(path).unwrap();
        assert_eq!(read_content, content);
    }

    #[test]
    fn test_write_output_to_named_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_string_lossy().to_string();

        struct NoClipboard;
        impl ClipboardPort for NoClipboard {
            fn write(&self, _content: &str) -> anyhow::Result<()> {
                panic!("clipboard should not be used");
            }
        }

        write_output("combined text", Some(path.clone()), false, &NoClipboard).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "combined text");
    }

    #[test]
    fn test_utf8_safe_preview() {
        let content = "مرحبا 🚀 This string has UTF-8 characters like: === src/file.rs ===";

        let preview_length = 20;
        let preview: String = content.chars().take(preview_length).collect();

        assert_eq!(preview.chars().count(), preview_length);
    }
}
