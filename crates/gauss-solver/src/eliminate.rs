//! Gauss-Jordan elimination engine
//!
//! Each step `k` runs `SelectPivot -> (Skip | Swap -> Normalize -> Eliminate)`.
//! Steps are strictly sequential. Inside a step, the parallel strategies hand
//! disjoint row blocks to a persistent [`WorkerPool`] and wait for all of them
//! before the next pivot is chosen.

use crate::matrix::Matrix;
use crate::pivot::{normalize_row, select_pivot, swap_rows, Pivot};
use gauss_core::{
    logical_processors, ExecutionStrategy, Result, RowKernel, RowPartition, ScalarBackend,
    VectorBackend, WorkerPool,
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Strategy and thread count for one elimination run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationConfig {
    /// Kernel and threading strategy
    pub strategy: ExecutionStrategy,
    /// Requested worker threads; clamped to `min(threads, size, 64)` and
    /// ignored by the single-thread strategy
    pub threads: usize,
}

impl EliminationConfig {
    pub fn new(strategy: ExecutionStrategy, threads: usize) -> Self {
        Self { strategy, threads }
    }

    /// Set the execution strategy
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the requested thread count
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}

impl Default for EliminationConfig {
    /// Vectorized strategy on every logical processor
    fn default() -> Self {
        Self {
            strategy: ExecutionStrategy::VectorizedMultiThread,
            threads: logical_processors(),
        }
    }
}

impl Matrix {
    /// Reduce the matrix in place and return the wall-clock time taken
    ///
    /// A column whose candidates are all exactly zero is skipped without
    /// error; the trailing column is then not a meaningful solution.
    ///
    /// # Errors
    /// Returns `Error::Execution` if the worker pool cannot be started.
    pub fn eliminate(&mut self, strategy: ExecutionStrategy, threads: usize) -> Result<Duration> {
        self.eliminate_with(&EliminationConfig::new(strategy, threads))
    }

    /// Same as [`Matrix::eliminate`], configured through an [`EliminationConfig`]
    #[instrument(skip(self), fields(size = self.size))]
    pub fn eliminate_with(&mut self, config: &EliminationConfig) -> Result<Duration> {
        let start = Instant::now();

        match config.strategy {
            ExecutionStrategy::ScalarSingleThread => self.run_sequential(&ScalarBackend::new()),
            ExecutionStrategy::ScalarMultiThread => {
                self.run_parallel(&ScalarBackend::new(), config.threads)?
            }
            ExecutionStrategy::VectorizedMultiThread => match VectorBackend::best() {
                VectorBackend::Avx2(kernel) => self.run_parallel(&kernel, config.threads)?,
                VectorBackend::Portable(kernel) => self.run_parallel(&kernel, config.threads)?,
            },
        }

        let elapsed = start.elapsed();
        debug!(
            elapsed_ms = elapsed.as_secs_f64() * 1e3,
            "elimination finished"
        );
        Ok(elapsed)
    }

    /// Pivot, swap and normalize for step `k`; `false` if the column is singular
    fn prepare_step(&mut self, k: usize) -> bool {
        match select_pivot(self, k) {
            Pivot::Singular => {
                debug!(column = k, "singular column, skipping step");
                false
            }
            Pivot::Row { row, value } => {
                swap_rows(self, k, row);
                normalize_row(self, k, value);
                true
            }
        }
    }

    fn run_sequential<K: RowKernel>(&mut self, kernel: &K) {
        let columns = self.columns;

        for k in 0..self.size {
            if !self.prepare_step(k) {
                continue;
            }

            let (above, rest) = self.data.split_at_mut(k * columns);
            let (pivot_row, below) = rest.split_at_mut(columns);
            for row in above
                .chunks_exact_mut(columns)
                .chain(below.chunks_exact_mut(columns))
            {
                reduce_row(kernel, row, pivot_row, k);
            }
        }
    }

    fn run_parallel<K: RowKernel>(&mut self, kernel: &K, threads: usize) -> Result<()> {
        let partition = RowPartition::new(self.size, threads);
        let pool = WorkerPool::new(partition.workers())?;
        let columns = self.columns;

        debug!(
            workers = partition.workers(),
            backend = kernel.backend_name(),
            "parallel elimination"
        );

        for k in 0..self.size {
            if !self.prepare_step(k) {
                continue;
            }

            let (pivot_row, blocks) = partition.split_around_pivot(&mut self.data, columns, k);
            pool.run_step(blocks, |mut block| {
                for row in block.rows_mut() {
                    reduce_row(kernel, row, pivot_row, k);
                }
            });
        }

        Ok(())
    }
}

/// Eliminate column `k` from one row using the normalized pivot row
///
/// The factor is read before the row changes and the pivot column is set to
/// exactly zero afterwards.
#[inline]
fn reduce_row<K: RowKernel>(kernel: &K, row: &mut [f64], pivot_row: &[f64], k: usize) {
    let factor = row[k];
    kernel.subtract_scaled_row(row, pivot_row, factor);
    row[k] = 0.0;
}
