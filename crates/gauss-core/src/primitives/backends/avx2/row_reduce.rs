//! AVX2 row reduction for f64

use crate::primitives::backends::scalar::subtract_scaled_tail;
use std::arch::x86_64::*;

/// Compute `dest[i] -= factor * src[i]` for `i` in `[0, len)`, four lanes at a time
///
/// Loads and stores are unaligned.
///
/// # Safety
/// - The CPU must support AVX2.
/// - `len` must be a multiple of 4.
/// - `dest` and `src` must each be valid for `len` elements and must not overlap.
#[target_feature(enable = "avx2")]
pub unsafe fn subtract_scaled_row_avx2(dest: *mut f64, src: *const f64, factor: f64, len: usize) {
    debug_assert_eq!(len % 4, 0, "vector length must be a multiple of 4");

    let factor_vec = _mm256_set1_pd(factor);
    let mut offset = 0;
    while offset < len {
        let d = _mm256_loadu_pd(dest.add(offset));
        let s = _mm256_loadu_pd(src.add(offset));
        let reduced = _mm256_sub_pd(d, _mm256_mul_pd(factor_vec, s));
        _mm256_storeu_pd(dest.add(offset), reduced);
        offset += 4;
    }
}

/// Full-row reduction: vector body over the largest multiple of 4, scalar tail for the rest
///
/// # Safety
/// The CPU must support AVX2.
#[target_feature(enable = "avx2")]
pub(super) unsafe fn subtract_scaled_row(dest: &mut [f64], src: &[f64], factor: f64) {
    let len = dest.len().min(src.len());
    debug_assert_eq!(dest.len(), src.len());

    let simd_len = len & !3;
    if simd_len > 0 {
        subtract_scaled_row_avx2(dest.as_mut_ptr(), src.as_ptr(), factor, simd_len);
    }

    subtract_scaled_tail(&mut dest[simd_len..len], &src[simd_len..len], factor);
}
