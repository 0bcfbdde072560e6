//! Rename planning and per-file apply
//!
//! Turns one file entry at one position into a concrete
//! `(original, destination)` pair, claiming a conflict-free destination
//! against whatever already exists on disk, then performs the move. Plans
//! are computed and applied strictly one at a time within a run; the
//! existence probe is what makes earlier renames visible to later ones.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::FileEntry;
use crate::error::RenameError;

use super::naming::{NamingOptions, compute_destination_name, split_file_name};

/// A computed rename for one file at one position in the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub original: PathBuf,
    pub destination: PathBuf,
}

impl RenamePlan {
    /// Base name of the destination, as shown in progress reporting
    pub fn destination_name(&self) -> String {
        self.destination
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// True when source and destination are the same file
    /// (case-insensitive), so apply will not touch the filesystem
    pub fn is_noop(&self) -> bool {
        paths_equal_ignore_case(&self.original, &self.destination)
    }
}

/// Case-insensitive path comparison
///
/// On case-preserving filesystems, renaming "track.mp3" to "Track.mp3"
/// targets the same file; treating those as equal keeps the engine from
/// fighting itself.
fn paths_equal_ignore_case(a: &Path, b: &Path) -> bool {
    a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}

/// Compute the conflict-free plan for one entry
///
/// The destination directory (`output_root/relative_dir` in recursive
/// mode) is created first so the collision probe runs against the tree the
/// file will actually land in.
pub fn plan_rename(
    entry: &FileEntry,
    position: usize,
    total: usize,
    options: &NamingOptions,
) -> Result<RenamePlan, RenameError> {
    let original = entry.absolute_in(&options.source_root);
    let dest_dir = options.output_root().join(entry.relative_dir());

    if !dest_dir.exists() {
        fs::create_dir_all(&dest_dir).map_err(|e| RenameError::CreateDirFailed {
            path: dest_dir.display().to_string(),
            source: e,
        })?;
    }

    let candidate = compute_destination_name(&entry.file_name(), position, total, options);
    let destination = resolve_destination(&dest_dir, &candidate, &original);

    Ok(RenamePlan {
        original,
        destination,
    })
}

/// Find a free destination path for a candidate name
///
/// Appends " (N)" to the candidate stem, N counting up from 1, until no
/// filesystem entry occupies the path. The file being renamed does not
/// count as a collision, so no-op renames stay no-ops. Any other entry
/// does, whether or not it belongs to the current run.
fn resolve_destination(dest_dir: &Path, candidate_name: &str, original: &Path) -> PathBuf {
    let (stem, extension) = split_file_name(candidate_name);
    let mut destination = dest_dir.join(candidate_name);
    let mut counter = 1;

    while destination.exists() && !paths_equal_ignore_case(&destination, original) {
        destination = dest_dir.join(format!("{} ({}){}", stem, counter, extension));
        counter += 1;
    }

    destination
}

/// Apply one plan: move the file unless source and destination already
/// name the same path
///
/// A failed rename is fatal to the batch; the caller does not retry and
/// does not roll back earlier renames.
pub fn apply_plan(plan: &RenamePlan) -> Result<(), RenameError> {
    if plan.is_noop() {
        return Ok(());
    }

    fs::rename(&plan.original, &plan.destination).map_err(|e| RenameError::RenameFailed {
        from: plan.original.display().to_string(),
        to: plan.destination.display().to_string(),
        source: e,
    })
}
