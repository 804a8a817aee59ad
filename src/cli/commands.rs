use crate::bridge::session::{Session, serve};
use crate::core::aggregator::{compose, save_aggregate};
use crate::core::catalog::list_text_files;
use crate::domain::models::CombineConfig;
use crate::infra::logger::setup_logger;
use crate::infra::output::{notify_saved, write_output};
use crate::infra::ports::{StdFileSystem, StdioSurface, SystemClipboard};
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "context-combiner")]
#[command(about = "Combine selected project files into one context blob", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the catalog of text-like files under the workspace root
    List {
        #[arg(long, default_value = ".")]
        path: String,
    },

    /// Combine selected files and write the result somewhere
    Combine {
        #[arg(long, default_value = ".")]
        path: String,

        /// Workspace-relative file to include, in order; repeatable
        #[arg(long = "file", required = true)]
        files: Vec<String>,

        /// Write the combined text to this file instead of stdout
        #[arg(long)]
        output: Option<String>,

        /// Copy the combined text to the clipboard
        #[arg(long)]
        clipboard: bool,

        /// Save as a timestamped context_<timestamp>.txt in the root
        #[arg(long)]
        save: bool,
    },

    /// Serve the request/response message channel over stdio
    Serve {
        #[arg(long)]
        path: Option<String>,
    },
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    match cli.command {
        Commands::List { path } => {
            info!("Starting list command");
            let entries = list_text_files(Path::new(&path))?;
            for entry in entries {
                println!("{}", entry.relative_path);
            }
        }
        Commands::Combine {
            path,
            files,
            output,
            clipboard,
            save,
        } => {
            info!("Starting combine command");
            debug!(
                "Command parameters: path={}, files={:?}, output={:?}, clipboard={}, save={}",
                path, files, output, clipboard, save
            );

            let config = CombineConfig {
                root_path: path,
                selected_files: files,
                output_path: output,
                to_clipboard: clipboard,
                save_in_root: save,
            };

            combine(&config)?;
        }
        Commands::Serve { path } => {
            info!("Starting serve command");
            let root = path.map(PathBuf::from);
            let clipboard = SystemClipboard;
            let session = Session::new(root, &StdFileSystem, &clipboard);
            serve(&session, &mut StdioSurface)?;
        }
    }
    Ok(())
}

fn combine(config: &CombineConfig) -> anyhow::Result<()> {
    let root = Path::new(&config.root_path);

    info!("Composing {} selected files", config.selected_files.len());
    let combined = compose(root, &config.selected_files);

    if config.save_in_root {
        let artifact = save_aggregate(root, &combined)?;
        notify_saved(&artifact.file_name)?;
        return Ok(());
    }

    write_output(
        &combined,
        config.output_path.clone(),
        config.to_clipboard,
        &SystemClipboard,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "context-combiner",
            "combine",
            "--path",
            "./src",
            "--file",
            "a.rs",
            "--file",
            "b.rs",
            "--clipboard",
        ])
        .unwrap();

        match cli.command {
            Commands::Combine {
                path,
                files,
                clipboard,
                save,
                ..
            } => {
                assert_eq!(path, "./src");
                assert_eq!(files, vec!["a.rs".to_string(), "b.rs".to_string()]);
                assert!(clipboard);
                assert!(!save);
            }
            _ => panic!("expected combine command"),
        }
    }

    #[test]
    fn test_combine_requires_files() {
        let result = Cli::try_parse_from(["context-combiner", "combine", "--path", "."]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serve_path_is_optional() {
        let cli = Cli::try_parse_from(["context-combiner", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { path } => assert!(path.is_none()),
            _ => panic!("expected serve command"),
        }
    }
}
