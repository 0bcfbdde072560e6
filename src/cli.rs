//! Command-line interface
//!
//! Argument definitions for the rename front-end. The flags mirror the
//! options the engine takes; everything here is presentation-layer glue.

use clap::Parser;
use std::path::PathBuf;

use crate::rename::NamingOptions;

/// Shuffle and batch-rename the audio files in a folder
#[derive(Parser, Debug)]
#[command(name = "mp3-shuffler")]
#[command(version)]
#[command(about = "Shuffle and batch-rename the audio files in a folder", long_about = None)]
pub struct Cli {
    /// Folder containing the audio files to rename
    pub folder: PathBuf,

    /// Naming pattern with {index} and {name} placeholders
    /// (without this, files are named "<index> - <name>")
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Shuffle the file order before renaming
    #[arg(short, long)]
    pub shuffle: bool,

    /// Include audio files in subfolders, keeping the folder structure
    #[arg(short, long)]
    pub recursive: bool,

    /// Move renamed files into this folder instead of renaming in place
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replace filesystem-invalid characters in names and tidy whitespace
    #[arg(long)]
    pub sanitize: bool,

    /// Extensions to include (defaults to the saved or built-in audio set)
    #[arg(short, long, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Print the planned names without renaming anything
    #[arg(long)]
    pub preview: bool,
}

impl Cli {
    /// Build the engine options these flags describe
    pub fn naming_options(&self) -> NamingOptions {
        let mut options = NamingOptions::new(&self.folder);
        if let Some(pattern) = &self.pattern {
            options.pattern = pattern.clone();
            options.use_sequential_prefix = false;
        }
        options.sanitize = self.sanitize;
        options.output_root = self.output.clone();
        options
    }
}
