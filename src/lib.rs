//! Gauss-Jordan elimination compared across execution strategies
//!
//! This crate re-exports the workspace members:
//!
//! - [`gauss_core`] - row-reduction kernels, row partitioning, worker pool
//! - [`gauss_solver`] - the augmented matrix, pivoting and the elimination engine
//!
//! # Example
//!
//! ```rust
//! use gauss_jordan::prelude::*;
//!
//! let mut m = Matrix::new(64)?;
//! m.generate_random();
//!
//! for strategy in ExecutionStrategy::ALL {
//!     let mut run = m.clone();
//!     let elapsed = run.eliminate(strategy, logical_processors())?;
//!     println!("{strategy}: {elapsed:?}");
//! }
//! # Ok::<(), gauss_jordan::Error>(())
//! ```

pub use gauss_core;
pub use gauss_solver;

pub use gauss_core::{logical_processors, Error, ExecutionStrategy, Result};
pub use gauss_solver::{EliminationConfig, Matrix};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{logical_processors, EliminationConfig, Error, ExecutionStrategy, Matrix, Result};
}
