//! Cancellable batch rename runner
//!
//! One worker thread per run walks the ordered file list through the
//! engine, emitting progress over an mpsc channel. Cancellation is
//! cooperative and observed only between files, so the file currently
//! being moved always completes; latency to honor a stop request is
//! therefore bounded by one rename.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;

use crate::core::FileEntry;
use crate::error::RenameError;

use super::engine::{apply_plan, plan_rename};
use super::events::RenameEvent;
use super::naming::NamingOptions;

/// Terminal outcome of a run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunOutcome {
    /// Still running (or never finished observing)
    #[default]
    Pending,
    Completed,
    Cancelled,
    Failed(String),
}

/// Shared state for one run
///
/// Created when the run starts, written only by the worker thread, and
/// read through [`RenameHandle`]. One run owns exactly one of these.
pub struct BatchState {
    /// (completed, total)
    progress: Mutex<(usize, usize)>,
    cancel_requested: AtomicBool,
    outcome: Mutex<RunOutcome>,
}

impl BatchState {
    fn new(total: usize) -> Self {
        Self {
            progress: Mutex::new((0, total)),
            cancel_requested: AtomicBool::new(false),
            outcome: Mutex::new(RunOutcome::Pending),
        }
    }

    pub fn request_cancel(&self) {
        self.cancel_requested.store(true, Ordering::SeqCst);
    }

    pub fn is_cancel_requested(&self) -> bool {
        self.cancel_requested.load(Ordering::SeqCst)
    }

    /// (completed, total) as of the last processed file
    #[allow(dead_code)]
    pub fn progress(&self) -> (usize, usize) {
        *self.progress.lock().unwrap()
    }

    #[allow(dead_code)]
    pub fn outcome(&self) -> RunOutcome {
        self.outcome.lock().unwrap().clone()
    }

    fn set_progress(&self, completed: usize) {
        self.progress.lock().unwrap().0 = completed;
    }

    fn set_outcome(&self, outcome: RunOutcome) {
        *self.outcome.lock().unwrap() = outcome;
    }
}

/// Handle for observing and stopping a running batch
#[derive(Clone)]
pub struct RenameHandle {
    state: Arc<BatchState>,
}

impl RenameHandle {
    /// Ask the worker to stop after the file currently in flight
    #[allow(dead_code)]
    pub fn stop(&self) {
        log::info!("Rename run: stop requested");
        self.state.request_cancel();
    }

    /// Shared run state, for progress display outside the event stream
    #[allow(dead_code)]
    pub fn state(&self) -> Arc<BatchState> {
        self.state.clone()
    }
}

/// Validate preconditions and start the worker thread for one run
///
/// Validation failures are returned synchronously and mean no filesystem
/// mutation happened and no event will be emitted. Once this returns `Ok`,
/// the run ends through exactly one terminal event, after which the
/// channel closes and a new run may be started.
pub fn start_rename(
    entries: Vec<FileEntry>,
    options: NamingOptions,
) -> Result<(RenameHandle, mpsc::Receiver<RenameEvent>), RenameError> {
    validate(&entries, &options)?;

    let state = Arc::new(BatchState::new(entries.len()));
    let (tx, rx) = mpsc::channel();

    let worker_state = state.clone();
    thread::spawn(move || {
        run_batch(&entries, &options, &worker_state, &mut |event| {
            // A dropped receiver is not a reason to stop renaming; the
            // run still records its outcome in the shared state.
            let _ = tx.send(event);
        });
    });

    Ok((RenameHandle { state }, rx))
}

fn validate(entries: &[FileEntry], options: &NamingOptions) -> Result<(), RenameError> {
    if entries.is_empty() {
        return Err(RenameError::EmptyFileList);
    }
    if !options.source_root.is_dir() {
        return Err(RenameError::SourceFolderMissing {
            path: options.source_root.display().to_string(),
        });
    }
    if !options.pattern_is_valid() {
        return Err(RenameError::PatternMissingPlaceholder {
            pattern: options.pattern.clone(),
        });
    }
    Ok(())
}

/// The per-file loop, separate from the thread so it can be driven
/// synchronously in tests
///
/// The cancel flag is read only at the top of each iteration. Exactly one
/// terminal event is emitted on every path out of the loop.
fn run_batch(
    entries: &[FileEntry],
    options: &NamingOptions,
    state: &BatchState,
    notify: &mut dyn FnMut(RenameEvent),
) {
    let total = entries.len();
    let mut completed = 0;

    for (i, entry) in entries.iter().enumerate() {
        if state.is_cancel_requested() {
            log::info!("Rename run cancelled after {} of {} files", completed, total);
            state.set_outcome(RunOutcome::Cancelled);
            notify(RenameEvent::Cancelled {
                files_renamed: completed,
            });
            return;
        }

        let result = plan_rename(entry, i + 1, total, options)
            .and_then(|plan| apply_plan(&plan).map(|()| plan));

        let plan = match result {
            Ok(plan) => plan,
            Err(e) => {
                log::error!("Rename run failed on {:?}: {}", entry.relative_path, e);
                state.set_outcome(RunOutcome::Failed(e.to_string()));
                notify(RenameEvent::Failed {
                    error: e.to_string(),
                });
                return;
            }
        };

        completed += 1;
        state.set_progress(completed);
        log::debug!("Renamed {:?} -> {}", entry.relative_path, plan.destination_name());
        notify(RenameEvent::FileRenamed {
            completed,
            new_name: plan.destination_name(),
        });
    }

    log::info!("Rename run completed: {} files", completed);
    state.set_outcome(RunOutcome::Completed);
    notify(RenameEvent::Completed {
        files_renamed: completed,
    });
}
