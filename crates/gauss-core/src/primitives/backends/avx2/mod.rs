//! AVX2 backend implementation
//!
//! Reduces rows four f64 lanes at a time with `std::arch` intrinsics. The
//! backend is only constructible when the CPU reports AVX2 support.

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod row_reduce;

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use row_reduce::subtract_scaled_row_avx2;

use crate::primitives::RowKernel;

/// AVX2 backend for x86_64 processors
///
/// Only obtainable through [`Avx2Backend::try_new`].
#[derive(Clone, Copy, Debug)]
pub struct Avx2Backend(());

impl Avx2Backend {
    /// Create the backend if the running CPU supports it
    pub fn try_new() -> Option<Self> {
        Self::is_available().then_some(Self(()))
    }

    /// Check if AVX2 is available on this CPU
    pub fn is_available() -> bool {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            is_x86_feature_detected!("avx2")
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            false
        }
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
impl RowKernel for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        "avx2"
    }

    fn simd_width(&self) -> usize {
        4
    }

    fn subtract_scaled_row(&self, dest: &mut [f64], src: &[f64], factor: f64) {
        // Safety: the only constructor is try_new(), which checks CPU support
        unsafe { row_reduce::subtract_scaled_row(dest, src, factor) }
    }
}

// Fallback for non-AVX2 builds
#[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
impl RowKernel for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        "avx2 (unavailable)"
    }
}
