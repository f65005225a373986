use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparsemat::SparseMatrix;

fn random_matrix(rng: &mut StdRng, n: usize, nnz: usize) -> SparseMatrix {
    SparseMatrix::from_entries(
        n,
        n,
        (0..nnz).map(|_| (rng.gen_range(0..n), rng.gen_range(0..n), rng.gen_range(-100i64..=100))),
    )
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    let mut rng = StdRng::seed_from_u64(1);

    for nnz in [1_000, 10_000, 100_000] {
        let lhs = random_matrix(&mut rng, 10_000, nnz);
        let rhs = random_matrix(&mut rng, 10_000, nnz);
        group.bench_with_input(BenchmarkId::from_parameter(nnz), &nnz, |b, _| {
            b.iter(|| black_box(lhs.add(&rhs).unwrap()))
        });
    }
    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    let mut rng = StdRng::seed_from_u64(2);

    for nnz in [1_000, 10_000, 50_000] {
        let lhs = random_matrix(&mut rng, 5_000, nnz);
        let rhs = random_matrix(&mut rng, 5_000, nnz);
        group.bench_with_input(BenchmarkId::from_parameter(nnz), &nnz, |b, _| {
            b.iter(|| black_box(lhs.multiply(&rhs).unwrap()))
        });
    }
    group.finish();
}

fn bench_text_round_trip(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let matrix = random_matrix(&mut rng, 100_000, 100_000);
    let text = matrix.to_text();

    c.bench_function("encode_100k", |b| b.iter(|| black_box(matrix.to_text())));
    c.bench_function("parse_100k", |b| {
        b.iter(|| black_box(text.parse::<SparseMatrix>().unwrap()))
    });
}

criterion_group!(benches, bench_add, bench_multiply, bench_text_round_trip);
criterion_main!(benches);
