//! Worker pool configuration.

/// Configuration for the worker pool.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Number of worker threads (default: number of CPU cores).
    pub threads: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            threads: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
        }
    }
}

impl PoolConfig {
    /// Sets the number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_at_least_one_thread() {
        assert!(PoolConfig::default().threads >= 1);
    }

    #[test]
    fn test_with_threads() {
        let config = PoolConfig::default().with_threads(3);
        assert_eq!(config.threads, 3);
    }
}
