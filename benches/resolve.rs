use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dense_index::{matrix, vector, Index, Matrix, Vector};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_vector(n: usize, seed: u64) -> Vector<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Vector::from((0..n).map(|_| rng.gen_range(-1.0..1.0)).collect::<Vec<_>>())
}

fn random_positions(n: usize, extent: usize, seed: u64) -> Vec<isize> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(1..=extent as isize)).collect()
}

// Contiguous range selection: pure metadata, should be flat across sizes.
fn bench_vector_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_range");
    for size in [100usize, 10_000, 1_000_000] {
        let v = random_vector(size, 7);
        let idx = Index::MinMax(2, size as isize - 1);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| vector::resolve(v.view(), "v", &idx).unwrap());
        });
    }
    group.finish();
}

// Gather: materializes, scales with the number of selected positions.
fn bench_vector_gather(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_gather");
    for size in [100usize, 10_000, 1_000_000] {
        let v = random_vector(size, 11);
        let idx = Index::Multi(random_positions(size / 2, size, 13));
        group.throughput(Throughput::Elements((size / 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| vector::resolve(v.view(), "v", &idx).unwrap());
        });
    }
    group.finish();
}

fn bench_matrix_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_block");
    for size in [32usize, 256, 1024] {
        let mut rng = StdRng::seed_from_u64(19);
        let m = Matrix::from_fn(size, size, |_, _| rng.gen_range(-1.0..1.0f64));
        let half = size as isize / 2;
        let row_idx = Index::MinMax(2, half);
        let col_idx = Index::MinMax(half, size as isize);
        group.throughput(Throughput::Elements((size * size / 4) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| matrix::resolve(m.view(), "m", &row_idx, &col_idx).unwrap());
        });
    }
    group.finish();
}

fn bench_matrix_row_gather(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_row_gather");
    for size in [32usize, 256, 1024] {
        let mut rng = StdRng::seed_from_u64(29);
        let m = Matrix::from_fn(size, size, |_, _| rng.gen_range(-1.0..1.0f64));
        let idx = Index::Multi(random_positions(size, size, 31));
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| matrix::resolve_rows(m.view(), "m", &idx).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_vector_range,
    bench_vector_gather,
    bench_matrix_block,
    bench_matrix_row_gather
);
criterion_main!(benches);
