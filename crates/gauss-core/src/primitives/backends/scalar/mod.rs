//! Scalar backend implementation
//!
//! Plain per-column loop without any SIMD instructions.

use crate::primitives::RowKernel;

/// Scalar backend - always available
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

impl RowKernel for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    // subtract_scaled_row uses the default implementation from the trait
}

/// Scalar tail loop shared by the vector backends for the trailing 0-3 columns
#[inline]
pub(crate) fn subtract_scaled_tail(dest: &mut [f64], src: &[f64], factor: f64) {
    for (d, &s) in dest.iter_mut().zip(src.iter()) {
        *d -= factor * s;
    }
}
