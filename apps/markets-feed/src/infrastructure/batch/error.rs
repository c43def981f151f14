//! Error types for batch execution.

use thiserror::Error;

/// Failure of the batch as a whole, distinct from individual task
/// failures: the batch never started (or a worker died), so no partial
/// data should be trusted beyond what the output reports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// The input task list was empty.
    #[error("no tasks to dispatch")]
    NoTasks,

    /// The cancellation token had already fired before dispatch.
    #[error("batch cancelled before dispatch")]
    Cancelled,

    /// A worker terminated abnormally (panic or runtime abort).
    #[error("batch worker terminated abnormally: {0}")]
    WorkerPanicked(String),
}

/// Per-task outcome error: either the task's own failure or a marker
/// that cancellation fired before the task could complete.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError<E> {
    /// The task ran and failed with its own error.
    #[error("{0}")]
    Failed(E),

    /// The shared cancellation signal fired before this task finished.
    #[error("task cancelled before completion")]
    Cancelled,
}

impl<E> TaskError<E> {
    /// The task's own error, when it ran and failed.
    pub fn into_task_error(self) -> Option<E> {
        match self {
            Self::Failed(e) => Some(e),
            Self::Cancelled => None,
        }
    }
}
