//! Error types for the rename engine and batch runner
//!
//! Validation errors are returned synchronously before a batch starts;
//! filesystem errors abort a running batch and surface to observers as the
//! `Failed` terminal event. Cancellation is a normal terminal state, not an
//! error, and has no variant here.

use thiserror::Error;

/// Errors produced while validating, planning, or applying a rename run
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("No files to rename")]
    EmptyFileList,

    #[error("Source folder not found: {path}")]
    SourceFolderMissing { path: String },

    #[error("Pattern must contain {{index}} or {{name}}: \"{pattern}\"")]
    PatternMissingPlaceholder { pattern: String },

    #[error("Failed to read folder {path}: {source}")]
    ScanFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    CreateDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename {from} -> {to}: {source}")]
    RenameFailed {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}
