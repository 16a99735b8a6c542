//! Dense Gauss-Jordan elimination with partial pivoting
//!
//! An augmented `n x (n + 1)` [`Matrix`] is reduced in place until its left
//! block is the identity and its trailing column holds the solution. The same
//! algorithm runs under three [`ExecutionStrategy`] values so their timings can
//! be compared:
//!
//! - scalar kernel on one thread
//! - scalar kernel on a partitioned worker pool
//! - 4-lane SIMD kernel on a partitioned worker pool
//!
//! # Example
//!
//! ```rust
//! use gauss_solver::{ExecutionStrategy, Matrix};
//!
//! // 2x + y = 5, x + 3y = 10
//! let mut m = Matrix::from_rows(&[[2.0, 1.0, 5.0], [1.0, 3.0, 10.0]])?;
//! let elapsed = m.eliminate(ExecutionStrategy::VectorizedMultiThread, 2)?;
//!
//! let x = m.solution_vector();
//! assert!((x[0] - 1.0).abs() < 1e-9 && (x[1] - 3.0).abs() < 1e-9);
//! println!("solved in {elapsed:?}");
//! # Ok::<(), gauss_solver::Error>(())
//! ```

pub mod eliminate;
pub mod export;
pub mod io;
pub mod matrix;
pub mod pivot;

pub use eliminate::EliminationConfig;
pub use matrix::{Matrix, RANDOM_MAX, RANDOM_MIN};
pub use pivot::Pivot;

pub use gauss_core::{logical_processors, Error, ExecutionStrategy, Result};
