// Mon Feb 02 2026 - Alex

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    pub max_threads: usize,
}

impl ScanConfig {
    /// Pool capacity for a batch run, never below 1.
    pub fn effective_threads(&self) -> usize {
        self.max_threads.max(1)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_threads: num_cpus::get(),
        }
    }
}
