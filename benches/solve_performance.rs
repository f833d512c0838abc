use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::{DMatrix, DVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use square_system::prelude::*;

/// build a random strictly diagonally dominant system, which is guaranteed
/// to be solvable without hitting the singularity path
fn build_system(order: usize, rng: &mut StdRng) -> SquareSystem<f64> {
    let mut a = DMatrix::from_fn(order, order, |_, _| rng.gen_range(-1.0..1.0));
    for i in 0..order {
        a[(i, i)] = (order as f64) + 1.;
    }
    let b = DVector::from_fn(order, |_, _| rng.gen_range(-10.0..10.0));
    SquareSystem::new(a, b).expect("dimensions are consistent by construction")
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("lu solve");
    for order in [10usize, 50, 100] {
        let mut rng = StdRng::seed_from_u64(order as u64);
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |bencher, &order| {
            bencher.iter_batched(
                || build_system(order, &mut rng),
                |system| system.solve().expect("system is nonsingular"),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
