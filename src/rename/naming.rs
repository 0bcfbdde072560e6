//! Destination name computation
//!
//! Pure functions that map a source file name and its position in the
//! ordered run to the new base name. Nothing in this module touches the
//! filesystem; collision handling happens in the engine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Placeholder replaced with the zero-padded position index
pub const INDEX_PLACEHOLDER: &str = "{index}";

/// Placeholder replaced with the original (possibly sanitized) stem
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Characters rejected by at least one supported filesystem
const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Options controlling how destination names are computed for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingOptions {
    /// Pattern with `{index}`/`{name}` placeholders; ignored in prefix mode
    pub pattern: String,
    /// Name files `<index> - <stem>` regardless of the pattern
    pub use_sequential_prefix: bool,
    /// Replace filesystem-invalid characters in stems and normalize whitespace
    pub sanitize: bool,
    /// Folder the file list was enumerated from
    pub source_root: PathBuf,
    /// Folder renamed files land in; `None` keeps them beside their source
    pub output_root: Option<PathBuf>,
}

impl NamingOptions {
    /// Prefix-mode options for a source folder, matching the UI defaults
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            pattern: format!("{} - {}", INDEX_PLACEHOLDER, NAME_PLACEHOLDER),
            use_sequential_prefix: true,
            sanitize: false,
            source_root: source_root.into(),
            output_root: None,
        }
    }

    /// Effective output root (the source root when no redirection was set)
    pub fn output_root(&self) -> &Path {
        self.output_root.as_deref().unwrap_or(&self.source_root)
    }

    /// Whether the pattern can produce distinct names
    ///
    /// Prefix mode never reads the pattern, so anything passes; otherwise
    /// at least one placeholder must be present. Checked once before a
    /// batch starts, never per file.
    pub fn pattern_is_valid(&self) -> bool {
        self.use_sequential_prefix
            || self.pattern.contains(INDEX_PLACEHOLDER)
            || self.pattern.contains(NAME_PLACEHOLDER)
    }
}

/// Zero-pad a 1-based position to the width of the total count
///
/// Total 150 pads position 7 to "007"; total 9 leaves it as "7".
pub fn pad_index(position: usize, total: usize) -> String {
    let width = total.to_string().len();
    format!("{:0width$}", position)
}

/// Split a file base name into `(stem, extension)` at the last dot
///
/// The extension keeps its leading dot and is empty when the name has
/// none. A leading dot alone (".hidden") is part of the stem.
pub fn split_file_name(file_name: &str) -> (String, String) {
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    (stem, extension)
}

/// Replace filesystem-invalid characters with underscores and collapse
/// whitespace runs to single spaces, trimming the ends
pub fn sanitize_stem(stem: &str) -> String {
    let replaced: String = stem
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '_' } else { c })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Compute the destination base name for one file
///
/// `position` is 1-based within the ordered run of `total` files. The
/// extension is preserved verbatim; placeholders and sanitization apply to
/// the stem only. Placeholder replacement is literal and single-pass;
/// unmatched placeholders are left as-is (presence was validated before
/// the run started).
pub fn compute_destination_name(
    file_name: &str,
    position: usize,
    total: usize,
    options: &NamingOptions,
) -> String {
    let (stem, extension) = split_file_name(file_name);
    let stem = if options.sanitize {
        sanitize_stem(&stem)
    } else {
        stem
    };
    let index = pad_index(position, total);

    let new_stem = if options.use_sequential_prefix {
        format!("{} - {}", index, stem)
    } else {
        options
            .pattern
            .replace(INDEX_PLACEHOLDER, &index)
            .replace(NAME_PLACEHOLDER, &stem)
    };

    format!("{}{}", new_stem, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_options(pattern: &str) -> NamingOptions {
        NamingOptions {
            pattern: pattern.to_string(),
            use_sequential_prefix: false,
            sanitize: false,
            source_root: PathBuf::from("/music"),
            output_root: None,
        }
    }

    #[test]
    fn test_pad_index_widths() {
        assert_eq!(pad_index(7, 9), "7");
        assert_eq!(pad_index(7, 10), "07");
        assert_eq!(pad_index(7, 150), "007");
        assert_eq!(pad_index(150, 150), "150");
    }

    #[test]
    fn test_split_file_name_at_last_dot() {
        assert_eq!(
            split_file_name("track.mp3"),
            ("track".to_string(), ".mp3".to_string())
        );
        assert_eq!(
            split_file_name("01. Intro.flac"),
            ("01. Intro".to_string(), ".flac".to_string())
        );
    }

    #[test]
    fn test_split_file_name_without_extension() {
        assert_eq!(split_file_name("README"), ("README".to_string(), String::new()));
    }

    #[test]
    fn test_split_file_name_leading_dot() {
        // A bare leading dot is not an extension separator
        assert_eq!(split_file_name(".hidden"), (".hidden".to_string(), String::new()));
    }

    #[test]
    fn test_sanitize_replaces_invalid_characters() {
        assert_eq!(sanitize_stem("My:Song*Title"), "My_Song_Title");
        assert_eq!(sanitize_stem("a/b\\c|d?e"), "a_b_c_d_e");
        assert_eq!(sanitize_stem("<\">"), "___");
    }

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(sanitize_stem("  My   Song \t Title "), "My Song Title");
        assert_eq!(sanitize_stem("Already Clean"), "Already Clean");
    }

    #[test]
    fn test_prefix_mode_name() {
        let options = NamingOptions::new("/music");
        assert_eq!(
            compute_destination_name("b.mp3", 1, 3, &options),
            "1 - b.mp3"
        );
        assert_eq!(
            compute_destination_name("song.mp3", 7, 150, &options),
            "007 - song.mp3"
        );
    }

    #[test]
    fn test_pattern_mode_substitution() {
        let options = pattern_options("{name} (Track {index})");
        assert_eq!(
            compute_destination_name("Song.mp3", 1, 12, &options),
            "Song (Track 01).mp3"
        );
    }

    #[test]
    fn test_pattern_without_placeholders_is_literal() {
        // Presence is validated before the run; computation itself never errors
        let options = pattern_options("Track");
        assert_eq!(compute_destination_name("a.mp3", 2, 5, &options), "Track.mp3");
    }

    #[test]
    fn test_placeholders_never_touch_extension() {
        let options = pattern_options("{index}-{name}");
        assert_eq!(
            compute_destination_name("a.name.mp3", 3, 20, &options),
            "03-a.name.mp3"
        );
    }

    #[test]
    fn test_sanitize_applies_before_substitution() {
        let mut options = pattern_options("{name}!");
        options.sanitize = true;
        assert_eq!(
            compute_destination_name("My:Song*Title.mp3", 1, 1, &options),
            "My_Song_Title!.mp3"
        );
    }

    #[test]
    fn test_sanitize_never_touches_extension() {
        let mut options = NamingOptions::new("/music");
        options.sanitize = true;
        // Only the stem is sanitized; the extension rides through verbatim
        assert_eq!(
            compute_destination_name("a b  c.MP3", 1, 1, &options),
            "1 - a b c.MP3"
        );
    }

    #[test]
    fn test_pattern_validity() {
        assert!(pattern_options("{index}").pattern_is_valid());
        assert!(pattern_options("{name}").pattern_is_valid());
        assert!(pattern_options("x {index} y {name}").pattern_is_valid());
        assert!(!pattern_options("no tokens").pattern_is_valid());

        // Prefix mode ignores the pattern entirely
        let mut options = pattern_options("no tokens");
        options.use_sequential_prefix = true;
        assert!(options.pattern_is_valid());
    }

    #[test]
    fn test_output_root_defaults_to_source() {
        let options = NamingOptions::new("/music");
        assert_eq!(options.output_root(), Path::new("/music"));

        let mut redirected = NamingOptions::new("/music");
        redirected.output_root = Some(PathBuf::from("/renamed"));
        assert_eq!(redirected.output_root(), Path::new("/renamed"));
    }
}
