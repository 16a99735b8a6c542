//! Elimination time per strategy, thread count and system size
//!
//! Every run starts from the same seeded matrix so the strategies reduce
//! identical inputs. Set `RUST_LOG=gauss_solver=debug` to see per-run logs.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gauss_jordan::gauss_core::best_vector_backend_name;
use gauss_jordan::{logical_processors, ExecutionStrategy, Matrix};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

const SIZES: [usize; 4] = [128, 256, 512, 1024];

fn seeded_matrix(size: usize) -> Matrix {
    let mut m = Matrix::new(size).expect("benchmark sizes are positive");
    m.generate_random_with(&mut ChaCha8Rng::seed_from_u64(size as u64));
    m
}

/// Thread counts to compare, bounded by this machine
fn thread_configs() -> Vec<usize> {
    let available = logical_processors();
    [1usize, 2, 4, 8, 16, 32, 64]
        .into_iter()
        .filter(|&t| t <= available.max(1))
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
    tracing::info!(
        backend = best_vector_backend_name(),
        processors = logical_processors(),
        "vectorized strategy backend"
    );

    for size in SIZES {
        let input = seeded_matrix(size);
        let mut group = c.benchmark_group(format!("eliminate_{size}"));
        group.sample_size(10);

        for strategy in ExecutionStrategy::ALL {
            let threads: Vec<usize> = if strategy.is_parallel() {
                thread_configs()
            } else {
                vec![1]
            };

            for t in threads {
                group.bench_with_input(
                    BenchmarkId::new(strategy.label(), t),
                    &t,
                    |b, &t| {
                        b.iter_batched(
                            || input.clone(),
                            |mut m| m.eliminate(strategy, t).expect("worker pool starts"),
                            criterion::BatchSize::LargeInput,
                        );
                    },
                );
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
