//! Batch rename engine and runner
//!
//! This module contains:
//! - Destination name computation (pattern/prefix rendering, sanitization)
//! - Rename planning with collision resolution and per-file apply
//! - The cancellable background runner and its event stream

mod engine;
mod events;
mod naming;
mod runner;

pub use engine::{RenamePlan, apply_plan, plan_rename};
pub use events::RenameEvent;
pub use naming::{
    INDEX_PLACEHOLDER, NAME_PLACEHOLDER, NamingOptions, compute_destination_name, pad_index,
    sanitize_stem, split_file_name,
};
pub use runner::{BatchState, RenameHandle, RunOutcome, start_rename};
