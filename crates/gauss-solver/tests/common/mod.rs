//! Shared utilities for integration tests

#![allow(dead_code)]

#[allow(unused_imports)]
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use gauss_solver::Matrix;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Tolerance for the reduced left block against the identity
pub const IDENTITY_EPSILON: f64 = 1e-9;

/// Relative tolerance between strategies
pub const STRATEGY_EPSILON: f64 = 1e-6;

/// Sizes whose augmented width covers every SIMD remainder
pub fn test_sizes() -> Vec<usize> {
    vec![1, 2, 3, 4, 5, 7, 16, 33, 64, 100]
}

/// Thread counts including the single-worker and over-subscribed cases
pub fn thread_counts() -> Vec<usize> {
    vec![1, 2, 3, 4, 8, 64, 128]
}

/// Reproducible random matrix with values in [1, 10)
pub fn seeded_matrix(size: usize, seed: u64) -> Matrix {
    let mut m = Matrix::new(size).unwrap();
    m.generate_random_with(&mut ChaCha8Rng::seed_from_u64(seed));
    m
}

/// Assert the left `size x size` block is the identity
pub fn assert_identity_block(m: &Matrix) {
    for i in 0..m.size() {
        for j in 0..m.size() {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(m.at(i, j), expected, epsilon = IDENTITY_EPSILON);
        }
    }
}

/// Largest absolute residual of `A x - b` for the original system
pub fn max_residual(original: &Matrix, x: &[f64]) -> f64 {
    let n = original.size();
    (0..n)
        .map(|i| {
            let ax: f64 = (0..n).map(|j| original.at(i, j) * x[j]).sum();
            (ax - original.at(i, n)).abs()
        })
        .fold(0.0, f64::max)
}
