//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

/// Relative tolerance allowed between scalar and vector kernels
pub const EPSILON: f64 = 1e-12;

/// Row lengths that exercise every SIMD remainder (0-3 trailing columns)
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        0,    // Empty
        1,    // Single element
        2,    // Half a vector
        3,    // One short of a vector
        4,    // Exactly one vector
        5,    // Vector + 1
        7,    // Vector + 3
        8,    // Two vectors
        9,    // 2x2 system augmented is 3 wide; 8x8 augmented is 9 wide
        17,   // 16x16 system augmented
        31,   // Prime
        64,   // Cache line multiple
        129,  // 128x128 system augmented
        2049, // Largest benchmarked system augmented
    ]
}

/// Generate a source row with varying magnitudes and signs
pub fn generate_source_row(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| ((i as f64) * 0.37).sin() * 10.0 + 0.25)
        .collect()
}

/// Generate a destination row distinct from the source
pub fn generate_dest_row(len: usize) -> Vec<f64> {
    (0..len).map(|i| (len - i) as f64 + 0.5).collect()
}

/// Assert two rows are equal within tolerance
pub fn assert_rows_equal(actual: &[f64], expected: &[f64], context: &str) {
    assert_eq!(actual.len(), expected.len(), "length mismatch for {context}");

    for (&a, &e) in actual.iter().zip(expected.iter()) {
        assert_relative_eq!(a, e, epsilon = EPSILON, max_relative = EPSILON);
    }
}
