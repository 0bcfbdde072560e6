//! Folder scanning and audio file discovery
//!
//! Enumerates the audio files a rename run will operate on, either as
//! direct children of the source folder or recursively with walkdir, and
//! provides the shuffle operation on an enumerated list.

use std::fs;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use walkdir::WalkDir;

use crate::error::RenameError;

/// Extensions recognized as audio files by default
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "mp3", "flac", "wav", "ogg", "m4a", "aac", "aiff", "opus",
];

/// A file selected for renaming, identified relative to the source root
///
/// The relative path carries sub-directory components when the folder was
/// scanned recursively; for a flat scan it is just the file name. Entries
/// are immutable once enumerated for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub relative_path: PathBuf,
}

impl FileEntry {
    pub fn new(relative_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
        }
    }

    /// The file name component, without directories
    pub fn file_name(&self) -> String {
        self.relative_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// The directory component relative to the source root (empty for
    /// direct children)
    pub fn relative_dir(&self) -> PathBuf {
        self.relative_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_default()
    }

    /// Absolute path of this entry under the given root
    pub fn absolute_in(&self, root: &Path) -> PathBuf {
        root.join(&self.relative_path)
    }
}

/// Check if a path carries one of the configured extensions (case-insensitive)
pub fn has_audio_extension(path: &Path, extensions: &[String]) -> bool {
    if let Some(ext) = path.extension() {
        let ext = ext.to_string_lossy();
        extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
    } else {
        false
    }
}

/// List audio files that are direct children of the source folder
///
/// Entries are sorted by name for a deterministic starting order; callers
/// shuffle afterwards if they want a random one.
pub fn list_audio_files(root: &Path, extensions: &[String]) -> Result<Vec<FileEntry>, RenameError> {
    if !root.is_dir() {
        return Err(RenameError::SourceFolderMissing {
            path: root.display().to_string(),
        });
    }

    let read_error = |e| RenameError::ScanFailed {
        path: root.display().to_string(),
        source: e,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(root).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();
        if path.is_file() && has_audio_extension(&path, extensions) {
            entries.push(FileEntry::new(PathBuf::from(entry.file_name())));
        }
    }

    entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(entries)
}

/// List audio files under the source folder recursively
///
/// Each entry keeps its directory component relative to the root so the
/// rename engine can mirror the tree under the output folder.
pub fn list_audio_files_recursive(
    root: &Path,
    extensions: &[String],
) -> Result<Vec<FileEntry>, RenameError> {
    if !root.is_dir() {
        return Err(RenameError::SourceFolderMissing {
            path: root.display().to_string(),
        });
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file()
            && has_audio_extension(path, extensions)
            && let Ok(relative) = path.strip_prefix(root)
        {
            entries.push(FileEntry::new(relative.to_path_buf()));
        }
    }

    entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(entries)
}

/// Shuffle an enumerated file list in place
pub fn shuffle_entries(entries: &mut [FileEntry]) {
    let mut rng = rand::thread_rng();
    entries.shuffle(&mut rng);
}
