//! MP3 Shuffler
//!
//! Lists the audio files in a folder, optionally shuffles their order, and
//! batch-renames them with a sequential prefix or a user-supplied pattern.
//! The rename itself runs on a background worker that streams per-file
//! progress and can be stopped between files.

mod cli;
mod core;
mod error;
mod logging;
mod rename;
#[cfg(test)]
mod test_fixtures;

use clap::Parser;

use crate::cli::Cli;
use crate::core::{RenameSettings, list_audio_files, list_audio_files_recursive, shuffle_entries};
use crate::rename::{RenameEvent, compute_destination_name, start_rename};

fn main() {
    logging::init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut settings = RenameSettings::load();
    let extensions = if cli.extensions.is_empty() {
        settings.extensions.clone()
    } else {
        cli.extensions.clone()
    };

    let mut entries = if cli.recursive {
        list_audio_files_recursive(&cli.folder, &extensions)
    } else {
        list_audio_files(&cli.folder, &extensions)
    }
    .map_err(|e| e.to_string())?;

    log::info!(
        "Found {} audio files in {}",
        entries.len(),
        cli.folder.display()
    );
    println!("Found {} audio files", entries.len());

    if cli.shuffle {
        shuffle_entries(&mut entries);
        log::info!("Shuffled file order");
    }

    let options = cli.naming_options();
    let total = entries.len();

    if cli.preview {
        // Show the names the engine will try first; collision suffixes are
        // only decided against the live filesystem during a real run
        for (i, entry) in entries.iter().enumerate() {
            let new_name = compute_destination_name(&entry.file_name(), i + 1, total, &options);
            println!("{} -> {}", entry.relative_path.display(), new_name);
        }
        return Ok(());
    }

    let (_handle, events) = start_rename(entries, options).map_err(|e| e.to_string())?;

    // Remember what the user ran with; failure to save is not fatal
    if let Some(pattern) = &cli.pattern {
        settings.pattern = pattern.clone();
    }
    settings.use_sequential_prefix = cli.pattern.is_none();
    settings.sanitize = cli.sanitize;
    settings.include_subfolders = cli.recursive;
    settings.output_folder = cli.output.clone();
    settings.extensions = extensions;
    if let Err(e) = settings.save() {
        log::warn!("Could not save settings: {}", e);
    }

    for event in events {
        match event {
            RenameEvent::FileRenamed { completed, new_name } => {
                println!("[{}/{}] {}", completed, total, new_name);
            }
            RenameEvent::Completed { files_renamed } => {
                println!("Done: renamed {} files", files_renamed);
            }
            RenameEvent::Cancelled { files_renamed } => {
                println!("Cancelled after {} of {} files", files_renamed, total);
            }
            RenameEvent::Failed { error } => {
                return Err(error);
            }
        }
    }

    Ok(())
}
