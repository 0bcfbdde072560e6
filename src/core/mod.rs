//! Core application logic
//!
//! This module contains:
//! - Folder scanning and audio file discovery
//! - Shuffling of enumerated file lists
//! - Persistence of the user's last-used rename options

mod scanning;
mod settings;

pub use scanning::{
    DEFAULT_EXTENSIONS, FileEntry, has_audio_extension, list_audio_files,
    list_audio_files_recursive, shuffle_entries,
};
pub use settings::RenameSettings;
