//! Scalar and vector row kernels must agree on every row length

mod common;

use common::*;
use gauss_core::{Avx2Backend, PortableSimdBackend, RowKernel, ScalarBackend, VectorBackend};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn check_against_scalar<K: RowKernel>(kernel: &K) {
    for len in edge_case_lengths() {
        for &factor in &[0.0, 1.0, -2.5, 1e-3, 7.125] {
            let src = generate_source_row(len);
            let mut expected = generate_dest_row(len);
            let mut actual = expected.clone();

            ScalarBackend.subtract_scaled_row(&mut expected, &src, factor);
            kernel.subtract_scaled_row(&mut actual, &src, factor);

            assert_rows_equal(
                &actual,
                &expected,
                &format!("{} len={len} factor={factor}", kernel.backend_name()),
            );
        }
    }
}

#[test]
fn test_portable_matches_scalar() {
    check_against_scalar(&PortableSimdBackend::new());
}

#[test]
fn test_avx2_matches_scalar() {
    if let Some(backend) = Avx2Backend::try_new() {
        assert_eq!(backend.simd_width(), 4);
        check_against_scalar(&backend);
    }
}

#[test]
fn test_best_vector_backend_is_four_wide() {
    match VectorBackend::best() {
        VectorBackend::Avx2(b) => {
            assert_eq!(b.simd_width(), 4);
            assert_eq!(b.backend_name(), "avx2");
        }
        VectorBackend::Portable(b) => {
            assert_eq!(b.simd_width(), 4);
            assert_eq!(b.backend_name(), "portable-simd");
        }
    }
}

#[test]
fn test_random_rows_agree() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let portable = PortableSimdBackend::new();

    for _ in 0..50 {
        let len = rng.gen_range(1..300);
        let factor: f64 = rng.gen_range(-10.0..10.0);
        let src: Vec<f64> = (0..len).map(|_| rng.gen_range(1.0..10.0)).collect();
        let mut expected: Vec<f64> = (0..len).map(|_| rng.gen_range(1.0..10.0)).collect();
        let mut actual = expected.clone();
        let mut actual_avx2 = expected.clone();

        ScalarBackend.subtract_scaled_row(&mut expected, &src, factor);
        portable.subtract_scaled_row(&mut actual, &src, factor);
        assert_rows_equal(&actual, &expected, "portable random row");

        if let Some(avx2) = Avx2Backend::try_new() {
            avx2.subtract_scaled_row(&mut actual_avx2, &src, factor);
            assert_rows_equal(&actual_avx2, &expected, "avx2 random row");
        }
    }
}
