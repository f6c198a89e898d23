// Wed Feb 04 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Batch run already in progress")]
    RunInProgress,
    #[error("Failed to spawn worker thread: {0}")]
    WorkerSpawn(#[from] std::io::Error),
}
