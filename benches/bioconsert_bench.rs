use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use bioconsert_core::{build_cost_tensor, solve, BucketOrder, PositionsMatrix, ScoringWeights};

fn synthetic_positions(n: usize, m: usize, seed: u64) -> PositionsMatrix {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut flat = vec![0i64; n * m];
    for x in 0..n {
        for v in 0..m {
            // 10% unranked, otherwise a bucket index in [0, n).
            flat[x * m + v] = if rng.gen_bool(0.1) {
                -1
            } else {
                rng.gen_range(0..n as i64)
            };
        }
    }
    PositionsMatrix::from_flat(flat, n, m).unwrap()
}

fn synthetic_departure(n: usize, seed: u64) -> BucketOrder {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut buckets: Vec<usize> = (0..n).collect();
    // Shuffle so the departure isn't already sorted.
    for i in (1..n).rev() {
        let j = rng.gen_range(0..=i);
        buckets.swap(i, j);
    }
    BucketOrder::from_vec(buckets).unwrap()
}

fn weights() -> (ScoringWeights, ScoringWeights) {
    (
        ScoringWeights::new([0.0, 1.0, 1.0, 0.0, 0.0, 0.0]),
        ScoringWeights::new([1.0, 1.0, 0.0, 0.0, 0.0, 0.0]),
    )
}

fn bench_build_cost_tensor(c: &mut Criterion) {
    let (w_before, w_tied) = weights();
    for &(n, m) in &[(16usize, 8usize), (64, 16), (128, 32)] {
        let positions = synthetic_positions(n, m, 42);
        c.bench_function(&format!("build_cost_tensor_n{}_m{}", n, m), |b| {
            b.iter(|| build_cost_tensor(black_box(&positions), black_box(&w_before), black_box(&w_tied)).unwrap())
        });
    }
}

fn bench_solve_single_departure(c: &mut Criterion) {
    let (w_before, w_tied) = weights();
    for &n in &[16usize, 64, 128] {
        let m = 16;
        let positions = synthetic_positions(n, m, 7);
        c.bench_function(&format!("solve_single_departure_n{}", n), |b| {
            b.iter_batched(
                || vec![synthetic_departure(n, 99)],
                |mut departures| {
                    let mut delta = vec![0.0];
                    solve(
                        black_box(&positions),
                        black_box(&mut departures),
                        black_box(&w_before),
                        black_box(&w_tied),
                        black_box(&mut delta),
                    )
                    .unwrap();
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
}

fn bench_solve_many_departures(c: &mut Criterion) {
    let (w_before, w_tied) = weights();
    let n = 32;
    let m = 16;
    let positions = synthetic_positions(n, m, 7);
    let r = 32;

    c.bench_function("solve_32_departures_n32", |b| {
        b.iter_batched(
            || (0..r).map(|k| synthetic_departure(n, k as u64)).collect::<Vec<_>>(),
            |mut departures| {
                let mut delta = vec![0.0; r];
                solve(
                    black_box(&positions),
                    black_box(&mut departures),
                    black_box(&w_before),
                    black_box(&w_tied),
                    black_box(&mut delta),
                )
                .unwrap();
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_build_cost_tensor,
    bench_solve_single_departure,
    bench_solve_many_departures
);
criterion_main!(benches);
