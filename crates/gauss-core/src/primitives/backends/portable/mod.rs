//! Portable 4-lane backend built on `wide::f64x4`
//!
//! Used for the vectorized strategy on targets where the AVX2 backend is not
//! compiled in or not supported by the running CPU.

use super::scalar::subtract_scaled_tail;
use crate::primitives::RowKernel;
use wide::f64x4;

/// Number of f64 lanes in one portable vector
const LANES: usize = 4;

/// Portable SIMD backend - always available
#[derive(Clone, Copy, Debug, Default)]
pub struct PortableSimdBackend;

impl PortableSimdBackend {
    pub fn new() -> Self {
        Self
    }
}

impl RowKernel for PortableSimdBackend {
    fn backend_name(&self) -> &'static str {
        "portable-simd"
    }

    fn simd_width(&self) -> usize {
        LANES
    }

    fn subtract_scaled_row(&self, dest: &mut [f64], src: &[f64], factor: f64) {
        debug_assert_eq!(dest.len(), src.len());

        let len = dest.len();
        let simd_len = len & !(LANES - 1);
        let (dest_body, dest_tail) = dest.split_at_mut(simd_len);
        let (src_body, src_tail) = src[..len].split_at(simd_len);

        let factor_vec = f64x4::splat(factor);
        for (d, s) in dest_body
            .chunks_exact_mut(LANES)
            .zip(src_body.chunks_exact(LANES))
        {
            let d_vec = f64x4::from([d[0], d[1], d[2], d[3]]);
            let s_vec = f64x4::from([s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&(d_vec - factor_vec * s_vec).to_array());
        }

        subtract_scaled_tail(dest_tail, src_tail, factor);
    }
}
