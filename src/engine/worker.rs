// Wed Feb 04 2026 - Alex

use crate::engine::EngineError;
use std::thread::{self, JoinHandle};

/// One pooled execution unit. Holds its task from checkout until
/// `start`, then the join handle until `wait`. A worker is bound to
/// exactly one job and is not reused.
pub struct Worker {
    task: Option<Box<dyn FnOnce() + Send + 'static>>,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    pub fn new<F>(task: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            task: Some(Box::new(task)),
            handle: None,
        }
    }

    /// Launch the worker thread. Starting twice is a no-op.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if let Some(task) = self.task.take() {
            let handle = thread::Builder::new()
                .name("sig-worker".into())
                .spawn(task)?;
            self.handle = Some(handle);
        }
        Ok(())
    }

    /// Block until the worker completes. A worker that never started
    /// returns immediately.
    pub fn wait(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    pub fn is_started(&self) -> bool {
        self.task.is_none()
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_create_start_wait() {
        let counter = Arc::new(AtomicUsize::new(0));
        let task_counter = counter.clone();

        let mut worker = Worker::new(move || {
            task_counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(!worker.is_started());

        worker.start().unwrap();
        assert!(worker.is_started());
        worker.wait();

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_double_start_runs_once() {
        let counter = Arc::new(AtomicUsize::new(0));
        let task_counter = counter.clone();

        let mut worker = Worker::new(move || {
            task_counter.fetch_add(1, Ordering::SeqCst);
        });
        worker.start().unwrap();
        worker.start().unwrap();
        worker.wait();

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_wait_without_start() {
        let mut worker = Worker::new(|| {});
        worker.wait();
        assert!(!worker.is_started());
    }
}
