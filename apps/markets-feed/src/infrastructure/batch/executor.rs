//! Worker-pool batch executor.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use tokio_util::sync::CancellationToken;

use super::config::BatchConfig;
use super::error::{BatchError, TaskError};

/// Executes a fixed list of independent async tasks with bounded
/// parallelism.
///
/// Workers consume a shared FIFO queue of `(index, input)` pairs; each
/// index is executed and written exactly once, so the output vector is
/// always aligned with the input list regardless of which worker ran a
/// task or in what order tasks completed. One task failing never affects
/// another; the worker records the error and keeps consuming.
#[derive(Debug, Clone)]
pub struct BatchExecutor {
    config: BatchConfig,
}

impl BatchExecutor {
    /// Create an executor with the given configuration.
    #[must_use]
    pub const fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Effective pool size for a batch of `tasks` items.
    #[must_use]
    pub fn effective_workers(&self, tasks: usize) -> usize {
        self.config.max_workers.clamp(1, tasks.max(1))
    }

    /// Run every input through `task`, returning one outcome per input
    /// at the input's position.
    ///
    /// Cancelling `cancel` aborts queued and in-flight work promptly;
    /// already-completed indices keep their results and indices that
    /// never ran surface as [`TaskError::Cancelled`].
    ///
    /// # Errors
    ///
    /// Returns a [`BatchError`] only when the batch cannot run at all:
    /// empty input, a token that fired before dispatch, or a worker that
    /// terminated abnormally.
    pub async fn run<T, R, E, F, Fut>(
        &self,
        inputs: Vec<T>,
        cancel: CancellationToken,
        task: F,
    ) -> Result<Vec<Result<R, TaskError<E>>>, BatchError>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, E>> + Send + 'static,
    {
        let total = inputs.len();
        if total == 0 {
            return Err(BatchError::NoTasks);
        }
        if cancel.is_cancelled() {
            return Err(BatchError::Cancelled);
        }

        let queue: Arc<Mutex<VecDeque<(usize, T)>>> =
            Arc::new(Mutex::new(inputs.into_iter().enumerate().collect()));
        let task = Arc::new(task);
        let workers = self.effective_workers(total);

        tracing::debug!(tasks = total, workers, "Dispatching batch");

        let mut handles = Vec::with_capacity(workers);
        for _ in 0..workers {
            let queue = Arc::clone(&queue);
            let task = Arc::clone(&task);
            let cancel = cancel.clone();

            handles.push(tokio::spawn(async move {
                let mut completed: Vec<(usize, Result<R, E>)> = Vec::new();
                loop {
                    if cancel.is_cancelled() {
                        break;
                    }
                    let next = {
                        let mut queue = queue.lock().unwrap_or_else(PoisonError::into_inner);
                        queue.pop_front()
                    };
                    let Some((index, input)) = next else { break };

                    tokio::select! {
                        () = cancel.cancelled() => break,
                        outcome = (*task)(input) => completed.push((index, outcome)),
                    }
                }
                completed
            }));
        }

        let mut slots: Vec<Option<Result<R, E>>> = Vec::with_capacity(total);
        slots.resize_with(total, || None);

        for handle in handles {
            match handle.await {
                Ok(completed) => {
                    for (index, outcome) in completed {
                        slots[index] = Some(outcome);
                    }
                }
                Err(e) => return Err(BatchError::WorkerPanicked(e.to_string())),
            }
        }

        Ok(slots
            .into_iter()
            .map(|slot| match slot {
                Some(Ok(value)) => Ok(value),
                Some(Err(e)) => Err(TaskError::Failed(e)),
                None => Err(TaskError::Cancelled),
            })
            .collect())
    }
}

impl Default for BatchExecutor {
    fn default() -> Self {
        Self::new(BatchConfig::default())
    }
}
