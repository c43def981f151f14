//! Batch executor configuration.

/// Default ceiling on concurrent workers.
const DEFAULT_MAX_WORKERS: usize = 10;

/// Configuration for [`super::BatchExecutor`].
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Maximum number of concurrent workers; the effective pool size is
    /// `min(tasks, max_workers)` and never below one.
    pub max_workers: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_worker_ceiling() {
        assert_eq!(BatchConfig::default().max_workers, 10);
    }
}
