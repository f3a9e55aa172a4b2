//! Benchmarks for arrayops kernels.

use arrayops::kernel::{
    add_to, dot_product, euclidean_distance, fold, nudge, scale, weighted_squared_error_sum,
    BinaryOp, SQUARED_DIFFERENCE,
};
use arrayops::{sammon, DistanceMatrix, StressOptions};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const DIMS: &[usize] = &[100, 300, 1000];

fn random_vec(rng: &mut ChaCha8Rng, dim: usize) -> Vec<f64> {
    (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn benchmark_nudge(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut group = c.benchmark_group("nudge");

    for &dim in DIMS {
        let mut xs = random_vec(&mut rng, dim);
        let ys = random_vec(&mut rng, dim);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &dim, |b, _| {
            b.iter(|| nudge(black_box(&mut xs), black_box(&ys), black_box(1e-3)))
        });
    }

    group.finish();
}

fn benchmark_add_scale(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut xs = random_vec(&mut rng, 300);
    let ys = random_vec(&mut rng, 300);

    c.bench_function("add_to_300", |b| {
        b.iter(|| add_to(black_box(&mut xs), black_box(&ys)))
    });

    c.bench_function("scale_300", |b| {
        b.iter(|| scale(black_box(&mut xs), black_box(0.999)))
    });
}

fn benchmark_dot_product(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut group = c.benchmark_group("dot_product");

    for &dim in DIMS {
        let xs = random_vec(&mut rng, dim);
        let ys = random_vec(&mut rng, dim);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &dim, |b, _| {
            b.iter(|| dot_product(black_box(&xs), black_box(&ys)))
        });
    }

    group.finish();
}

// Generic fold with a closure against the named operator constant.
fn benchmark_fold_dispatch(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let xs = random_vec(&mut rng, 1000);
    let ys = random_vec(&mut rng, 1000);

    let mut group = c.benchmark_group("fold_dispatch");

    group.bench_function("constant", |b| {
        b.iter(|| SQUARED_DIFFERENCE.fold(black_box(&xs), black_box(&ys)))
    });

    group.bench_function("closure", |b| {
        let op = |x: f64, y: f64| (x - y) * (x - y);
        b.iter(|| fold(&op, black_box(&xs), black_box(&ys)))
    });

    group.bench_function("bounded_early_exit", |b| {
        b.iter(|| SQUARED_DIFFERENCE.fold_up_to(black_box(&xs), black_box(&ys), black_box(1.0)))
    });

    group.finish();
}

fn benchmark_distances(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let xs = random_vec(&mut rng, 300);
    let ys: Vec<f64> = random_vec(&mut rng, 300).iter().map(|v| v.abs()).collect();

    c.bench_function("euclidean_distance_300", |b| {
        b.iter(|| euclidean_distance(black_box(&xs), black_box(&ys)))
    });

    c.bench_function("weighted_squared_error_sum_300", |b| {
        b.iter(|| weighted_squared_error_sum(black_box(&xs), black_box(&ys)))
    });
}

fn benchmark_stress(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let points: Vec<Vec<f64>> = (0..200).map(|_| random_vec(&mut rng, 50)).collect();
    let projected: Vec<Vec<f64>> = points.iter().map(|p| p[..2].to_vec()).collect();

    let original = DistanceMatrix::from_points(&points).unwrap();
    let projected = DistanceMatrix::from_points(&projected).unwrap();

    let mut group = c.benchmark_group("sammon_stress");

    group.bench_function("full", |b| {
        b.iter(|| sammon::stress(black_box(&original), black_box(&projected), &StressOptions::new()))
    });

    group.bench_function("exceeds_0.1", |b| {
        b.iter(|| sammon::stress_exceeds(black_box(&original), black_box(&projected), 0.1))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_nudge,
    benchmark_add_scale,
    benchmark_dot_product,
    benchmark_fold_dispatch,
    benchmark_distances,
    benchmark_stress,
);

criterion_main!(benches);
