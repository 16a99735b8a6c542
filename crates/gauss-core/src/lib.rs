//! Core kernels and execution plumbing for Gauss-Jordan elimination
//!
//! This crate knows nothing about matrices. It provides the two layers the
//! elimination engine in `gauss-solver` is built on:
//!
//! 1. **Primitives** - the row-reduction kernel `dest -= factor * src` in a
//!    scalar and two 4-lane SIMD variants
//! 2. **Execution** - strategies, static row partitioning and the persistent
//!    worker pool that runs one elimination step at a time
//!
//! # Example
//!
//! ```rust
//! use gauss_core::{RowKernel, RowPartition, ScalarBackend};
//!
//! let partition = RowPartition::new(10, 3);
//! assert_eq!(partition.ranges(), &[0..3, 3..6, 6..10]);
//!
//! let mut row = vec![3.0, 3.0];
//! ScalarBackend::new().subtract_scaled_row(&mut row, &[1.0, 2.0], 1.5);
//! assert_eq!(row, vec![1.5, 0.0]);
//! ```

pub mod error;
pub mod execution;
pub mod primitives;

pub use error::{Error, Result};

pub use execution::{
    effective_threads, logical_processors, ExecutionStrategy, RowBlock, RowPartition, WorkerPool,
    MAX_WORKERS,
};

pub use primitives::{
    best_vector_backend_name, Avx2Backend, PortableSimdBackend, RowKernel, ScalarBackend,
    VectorBackend,
};

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use primitives::backends::avx2::subtract_scaled_row_avx2;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{
        logical_processors, ExecutionStrategy, Result, RowKernel, RowPartition, ScalarBackend,
        VectorBackend, WorkerPool,
    };
}
