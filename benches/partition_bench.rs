use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use pareto_cells::data::Matrix;
use pareto_cells::partition::NondominatedPartitioning;

fn random_points(rng: &mut SmallRng, n: usize, m: usize) -> Matrix<f64> {
    Matrix::from_rows(
        (0..n)
            .map(|_| (0..m).map(|_| rng.r#gen::<f64>()).collect())
            .collect(),
    )
    .unwrap()
}

fn bench_two_objective_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_2d");
    for &n in &[32usize, 256, 1024] {
        let mut rng = SmallRng::seed_from_u64(42);
        let y = random_points(&mut rng, n, 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &y, |b, y| {
            b.iter(|| {
                let part = NondominatedPartitioning::with_outcomes(
                    vec![0.0, 0.0],
                    black_box(y.clone()),
                )
                .unwrap();
                black_box(part.compute_hypervolume().unwrap())
            })
        });
    }
    group.finish();
}

fn bench_three_objective_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_3d");
    for &n in &[8usize, 16, 32] {
        let mut rng = SmallRng::seed_from_u64(42);
        let y = random_points(&mut rng, n, 3);
        group.bench_with_input(BenchmarkId::from_parameter(n), &y, |b, y| {
            b.iter(|| {
                let part = NondominatedPartitioning::with_outcomes(
                    vec![0.0, 0.0, 0.0],
                    black_box(y.clone()),
                )
                .unwrap();
                black_box(part.compute_hypervolume().unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_two_objective_sweep, bench_three_objective_grid);
criterion_main!(benches);
