//! Execution strategies and parallel plumbing for elimination
//!
//! This module holds everything about *how* elimination runs, independent of
//! the matrix type:
//!
//! - [`ExecutionStrategy`] - which kernel and whether to use workers
//! - [`RowPartition`] - static split of rows into per-worker blocks
//! - [`WorkerPool`] - persistent threads with a per-step barrier

mod partition;
mod pool;

pub use partition::{effective_threads, RowBlock, RowPartition, MAX_WORKERS};
pub use pool::WorkerPool;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Execution strategy for one elimination run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionStrategy {
    /// Scalar kernel on the calling thread, no partitioning
    ScalarSingleThread,
    /// Scalar kernel on partitioned worker threads
    ScalarMultiThread,
    /// 4-lane SIMD kernel on partitioned worker threads
    VectorizedMultiThread,
}

impl ExecutionStrategy {
    /// Every strategy, in comparison-table order
    pub const ALL: [ExecutionStrategy; 3] = [
        ExecutionStrategy::ScalarSingleThread,
        ExecutionStrategy::ScalarMultiThread,
        ExecutionStrategy::VectorizedMultiThread,
    ];

    /// Stable human-readable label for result tables
    pub fn label(&self) -> &'static str {
        match self {
            Self::ScalarSingleThread => "Scalar (single thread)",
            Self::ScalarMultiThread => "Scalar (multi-thread)",
            Self::VectorizedMultiThread => "SIMD (multi-thread)",
        }
    }

    /// Whether rows are reduced on worker threads
    pub fn is_parallel(&self) -> bool {
        !matches!(self, Self::ScalarSingleThread)
    }

    /// Whether rows are reduced with the 4-lane kernel
    pub fn is_vectorized(&self) -> bool {
        matches!(self, Self::VectorizedMultiThread)
    }
}

impl fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of logical processors, to bound thread counts offered to users
pub fn logical_processors() -> usize {
    num_cpus::get()
}
