//! Batch runner events
//!
//! Shared event types sent from the rename worker to whoever is observing
//! the run, in the order the files are processed.

/// Events emitted by a rename run
///
/// Per-file events arrive in strictly increasing `completed` order, one
/// per processed file, and exactly one of the terminal variants ends the
/// stream before the channel closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameEvent {
    /// One file was processed; `completed` counts it
    FileRenamed { completed: usize, new_name: String },
    /// Every file in the run was processed
    Completed { files_renamed: usize },
    /// The run was stopped between files at the caller's request
    Cancelled { files_renamed: usize },
    /// A filesystem operation failed; earlier renames are not rolled back
    Failed { error: String },
}

impl RenameEvent {
    /// True for the variants that end a run
    #[allow(dead_code)]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RenameEvent::FileRenamed { .. })
    }
}
