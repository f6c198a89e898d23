// Wed Feb 04 2026 - Alex

use crate::config::ScanConfig;
use crate::engine::{EngineError, Worker};
use crate::memory::{Address, MemoryRange};
use crate::pattern::Pattern;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

type Callback = Box<dyn FnOnce(Address) + Send + 'static>;

struct BatchEntry {
    name: String,
    pattern: Pattern,
    callback: Callback,
}

/// One scan job: an entry paired with the shared range. Owned by exactly
/// one worker for the duration of a wave; everything it needs crosses the
/// thread boundary by value.
struct Job {
    range: MemoryRange,
    entry: BatchEntry,
    matched: Arc<AtomicUsize>,
}

impl Job {
    fn execute(self) {
        match self.range.scan(&self.entry.pattern) {
            Some(handle) => {
                self.matched.fetch_add(1, Ordering::Relaxed);
                (self.entry.callback)(handle);
            }
            None => log::debug!("No match for batch entry '{}'", self.entry.name),
        }
    }
}

/// Runs a set of named pattern searches against one shared range through a
/// fixed-capacity worker pool. Waves are synchronous: up to `max_workers`
/// jobs are checked out in FIFO order, started together, and joined
/// together before the next wave is admitted.
pub struct BatchScheduler {
    max_workers: usize,
    entries: Mutex<Vec<BatchEntry>>,
    running: AtomicBool,
}

impl BatchScheduler {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers: max_workers.max(1),
            entries: Mutex::new(Vec::new()),
            running: AtomicBool::new(false),
        }
    }

    pub fn with_config(config: &ScanConfig) -> Self {
        Self::new(config.effective_threads())
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Entries waiting for the next run.
    pub fn pending(&self) -> usize {
        self.entries.lock().len()
    }

    /// Register a named pattern. The callback fires at most once, on the
    /// worker that found the match, with the region-relative address.
    /// Rejected while a run is draining entries.
    pub fn add<N, F>(&self, name: N, pattern: Pattern, callback: F) -> Result<(), EngineError>
    where
        N: Into<String>,
        F: FnOnce(Address) + Send + 'static,
    {
        if self.running.load(Ordering::Acquire) {
            return Err(EngineError::RunInProgress);
        }

        self.entries.lock().push(BatchEntry {
            name: name.into(),
            pattern,
            callback: Box::new(callback),
        });
        Ok(())
    }

    /// Drain every registered entry against `range`. Blocks the caller
    /// until the whole batch has completed, then reports how many entries
    /// matched. The entry set is cleared; the scheduler can be reused for
    /// an unrelated batch afterwards.
    pub fn run(&self, range: MemoryRange) -> Result<usize, EngineError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(EngineError::RunInProgress);
        }

        let entries = std::mem::take(&mut *self.entries.lock());
        let total = entries.len();
        let matched = Arc::new(AtomicUsize::new(0));

        let mut jobs: VecDeque<Job> = entries
            .into_iter()
            .map(|entry| Job {
                range: range.clone(),
                entry,
                matched: matched.clone(),
            })
            .collect();

        let result = self.process(&mut jobs);
        self.running.store(false, Ordering::Release);

        let found = matched.load(Ordering::Acquire);
        log::debug!("Batch run complete: {}/{} entries resolved", found, total);
        result.map(|_| found)
    }

    // Checkout -> start -> return, repeated until the job queue drains.
    fn process(&self, jobs: &mut VecDeque<Job>) -> Result<(), EngineError> {
        let mut active: Vec<Worker> = Vec::with_capacity(self.max_workers);

        while !jobs.is_empty() {
            self.checkout(jobs, &mut active);
            let started = self.start_wave(&mut active);
            self.return_wave(&mut active);
            started?;
        }

        Ok(())
    }

    // Bind queued jobs to fresh workers until the pool is full or the
    // queue is empty.
    fn checkout(&self, jobs: &mut VecDeque<Job>, active: &mut Vec<Worker>) {
        while active.len() < self.max_workers {
            match jobs.pop_front() {
                Some(job) => active.push(Worker::new(move || job.execute())),
                None => break,
            }
        }
    }

    // Start every checked-out worker. A spawn failure stops the wave from
    // growing; the error is surfaced after the started workers are joined.
    fn start_wave(&self, active: &mut [Worker]) -> Result<(), EngineError> {
        for worker in active.iter_mut() {
            worker.start()?;
        }
        Ok(())
    }

    // Block until the wave drains, then release the workers.
    fn return_wave(&self, active: &mut Vec<Worker>) {
        for worker in active.iter_mut() {
            worker.wait();
        }
        active.clear();
    }
}
