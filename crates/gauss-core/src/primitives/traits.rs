//! Row-reduction kernel trait
//!
//! Every backend implements the same contract so the elimination engine can
//! be monomorphized over the kernel it runs.

/// Low-level row operations used by Gauss-Jordan elimination
///
/// Implementations differ only in how many columns they process per
/// instruction. Results must agree with [`ScalarBackend`](super::ScalarBackend)
/// up to floating-point rounding order.
pub trait RowKernel: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Get the SIMD width (number of f64 lanes processed per operation)
    fn simd_width(&self) -> usize {
        1
    }

    /// Compute `dest[j] -= factor * src[j]` for every column `j`
    fn subtract_scaled_row(&self, dest: &mut [f64], src: &[f64], factor: f64) {
        debug_assert_eq!(
            dest.len(),
            src.len(),
            "Destination and source rows must have same length"
        );

        for (d, &s) in dest.iter_mut().zip(src.iter()) {
            *d -= factor * s;
        }
    }
}
