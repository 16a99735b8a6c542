//! Persistent worker pool for per-step parallel elimination
//!
//! The pool is built once per elimination run and reused for every step.
//! Each step hands it one task per row block; [`WorkerPool::run_step`]
//! returns only after every task of that step has finished, which is the
//! barrier between elimination steps.

use crate::{Error, Result};
use std::sync::Arc;

/// Fixed-size pool of worker threads backed by a dedicated Rayon pool
#[derive(Clone, Debug)]
pub struct WorkerPool {
    pool: Arc<rayon::ThreadPool>,
    workers: usize,
}

impl WorkerPool {
    /// Create a pool with exactly `workers` threads
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::InvalidParameter(
                "worker pool needs at least one thread".to_string(),
            ));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("gauss-worker-{i}"))
            .build()
            .map_err(|e| Error::Execution(format!("Failed to create thread pool: {e}")))?;

        log::debug!("started worker pool with {workers} threads");

        Ok(Self {
            pool: Arc::new(pool),
            workers,
        })
    }

    /// Number of worker threads
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `f` once per task on the pool and wait for all of them
    ///
    /// Tasks run in no particular order relative to each other. When this
    /// returns, every task has completed and its borrows have ended.
    pub fn run_step<I, F>(&self, tasks: I, f: F)
    where
        I: IntoIterator,
        I::IntoIter: Send,
        I::Item: Send,
        F: Fn(I::Item) + Sync,
    {
        let tasks = tasks.into_iter();
        let f = &f;
        self.pool.scope(move |scope| {
            for task in tasks {
                scope.spawn(move |_| f(task));
            }
        });
    }
}
