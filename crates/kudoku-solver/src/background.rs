//! Shared background worker for long-running solve/generate calls.
//!
//! Searching a sparse puzzle or generating a new one can take noticeable
//! time, so these calls must be invocable off the caller's thread. This
//! module runs tasks on one shared worker thread and hands back a polling
//! handle paired with a [`CancelToken`], keeping a UI loop responsive
//! without any shared mutable state: each task owns its private grid and
//! constraint index.
//!
//! # Examples
//!
//! ```
//! use kudoku_core::DigitGrid;
//! use kudoku_solver::background;
//!
//! let puzzle: DigitGrid =
//!     "84..7.59.5.....38....5.3..2.2.....1.3.....9...7.9.52..9.5..4.....7.1....28...7..."
//!         .parse()?;
//!
//! let handle = background::spawn(move |cancel| {
//!     kudoku_solver::search(&puzzle, 2, cancel)
//! });
//! let outcome = handle.wait()??;
//! assert_eq!(outcome.into_solutions().map(|s| s.len()), Some(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{
    fmt,
    sync::{OnceLock, mpsc},
};

use crate::cancel::CancelToken;

type Job = Box<dyn FnOnce() + Send>;

// Shared worker thread sender reused across tasks.
static WORKER_SENDER: OnceLock<mpsc::Sender<Job>> = OnceLock::new();

fn worker_sender() -> &'static mpsc::Sender<Job> {
    WORKER_SENDER.get_or_init(|| {
        let (tx, rx) = mpsc::channel::<Job>();
        std::thread::spawn(move || {
            while let Ok(job) = rx.recv() {
                job();
            }
        });
        tx
    })
}

/// Errors observed while polling background work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TaskError {
    /// The worker dropped the task's result channel unexpectedly.
    #[display("background worker disconnected")]
    WorkerDisconnected,
}

/// A handle for polling the completion of a background task.
///
/// Dropping the handle detaches the task; cancel it first if its result no
/// longer matters.
pub struct TaskHandle<T> {
    receiver: mpsc::Receiver<T>,
    cancel: CancelToken,
}

impl<T> fmt::Debug for TaskHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

impl<T> TaskHandle<T> {
    /// Attempts to poll for the completed result without blocking.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::WorkerDisconnected`] if the worker dropped the
    /// result channel without completing the task.
    pub fn poll(&mut self) -> Result<Option<T>, TaskError> {
        use mpsc::TryRecvError;

        match self.receiver.try_recv() {
            Ok(result) => Ok(Some(result)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(TaskError::WorkerDisconnected),
        }
    }

    /// Blocks until the task completes and returns its result.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::WorkerDisconnected`] if the worker dropped the
    /// result channel without completing the task.
    pub fn wait(self) -> Result<T, TaskError> {
        self.receiver.recv().map_err(|_| TaskError::WorkerDisconnected)
    }

    /// Requests cooperative cancellation of the task.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns a clone of the task's cancel token.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }
}

/// Enqueues a task on the shared worker thread.
///
/// The task receives a fresh [`CancelToken`], which the returned handle can
/// trip; a task that honors the token yields its "cancelled" result through
/// the normal completion path.
pub fn spawn<T, F>(task: F) -> TaskHandle<T>
where
    T: Send + 'static,
    F: FnOnce(&CancelToken) -> T + Send + 'static,
{
    let cancel = CancelToken::new();
    let token = cancel.clone();
    let (result_tx, result_rx) = mpsc::channel();
    let job: Job = Box::new(move || {
        // The receiver may be gone if the caller dropped the handle.
        let _ = result_tx.send(task(&token));
    });
    let _ = worker_sender().send(job);
    TaskHandle {
        receiver: result_rx,
        cancel,
    }
}
