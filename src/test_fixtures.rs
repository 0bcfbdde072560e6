//! Test fixtures for rename tests
//!
//! Utilities to fabricate folders of dummy audio files. Renaming never
//! looks inside a file, so a few bytes of filler are all a "track" needs.

#![cfg(test)]

use std::path::{Path, PathBuf};

/// Write a dummy audio file, creating intermediate directories as needed
///
/// `name` may carry sub-directory components ("disc1/a.mp3").
pub fn create_audio_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, b"ID3 dummy audio payload").expect("Failed to write fixture file");
    path
}

/// Create numbered mp3 tracks in a folder, returning their file names
pub fn create_test_album(dir: &Path, track_count: usize) -> Vec<String> {
    (1..=track_count)
        .map(|i| {
            let name = format!("Track {:02}.mp3", i);
            create_audio_file(dir, &name);
            name
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_audio_file_with_subdir() {
        let dir = TempDir::new().unwrap();
        let path = create_audio_file(dir.path(), "disc1/a.mp3");
        assert!(path.exists());
        assert_eq!(path, dir.path().join("disc1").join("a.mp3"));
    }

    #[test]
    fn test_create_test_album() {
        let dir = TempDir::new().unwrap();
        let names = create_test_album(dir.path(), 3);
        assert_eq!(names, vec!["Track 01.mp3", "Track 02.mp3", "Track 03.mp3"]);
        for name in names {
            assert!(dir.path().join(name).exists());
        }
    }
}
