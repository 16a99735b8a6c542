//! Row-reduction primitives with compile-time dispatch
//!
//! # Architecture
//!
//! - Single `RowKernel` trait for the one operation elimination needs
//! - Concrete backend types: `ScalarBackend`, `PortableSimdBackend`, `Avx2Backend`
//! - Compile-time backend selection with runtime validation for AVX2
//!
//! # Usage
//!
//! ```rust
//! use gauss_core::primitives::{RowKernel, ScalarBackend};
//!
//! let mut dest = vec![4.0, 5.0, 6.0];
//! ScalarBackend::new().subtract_scaled_row(&mut dest, &[1.0, 1.0, 1.0], 2.0);
//! assert_eq!(dest, vec![2.0, 3.0, 4.0]);
//! ```

pub mod backends;
pub mod traits;

pub use backends::{Avx2Backend, PortableSimdBackend, ScalarBackend, VectorBackend};
pub use traits::RowKernel;

/// Name of the backend the vectorized strategy would use on this CPU
pub fn best_vector_backend_name() -> &'static str {
    VectorBackend::best().backend_name()
}
