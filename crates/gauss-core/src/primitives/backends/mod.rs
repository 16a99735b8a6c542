//! Concrete row-reduction backends
//!
//! Simple types with compile-time dispatch. The only runtime choice is which
//! 4-lane backend the vectorized strategy runs on, made once per elimination
//! through [`VectorBackend::best`].

pub mod avx2;
pub mod portable;
pub mod scalar;

pub use avx2::Avx2Backend;
pub use portable::PortableSimdBackend;
pub use scalar::ScalarBackend;

/// The 4-lane backend selected for the vectorized strategy
#[derive(Clone, Copy, Debug)]
pub enum VectorBackend {
    /// `std::arch` AVX2 intrinsics
    Avx2(Avx2Backend),
    /// `wide::f64x4` on any target
    Portable(PortableSimdBackend),
}

impl VectorBackend {
    /// Pick AVX2 when compiled in and supported by this CPU, the portable backend otherwise
    pub fn best() -> Self {
        match Avx2Backend::try_new() {
            Some(backend) => Self::Avx2(backend),
            None => {
                log::debug!("AVX2 unavailable, using portable 4-lane row kernel");
                Self::Portable(PortableSimdBackend::new())
            }
        }
    }

    /// Name of the backend that will run
    pub fn backend_name(&self) -> &'static str {
        use crate::primitives::RowKernel;

        match self {
            Self::Avx2(b) => b.backend_name(),
            Self::Portable(b) => b.backend_name(),
        }
    }
}
