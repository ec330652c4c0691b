use cachelab::{
    GrowableBuffer, GrowthPolicy, JaggedMatrix, Matrix, matmul_ijk, matmul_ikj, multiply_jagged,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(20);

    for size in [64, 128, 256] {
        let (m, n, k) = (size, size, size);
        let a_at = |i: usize, j: usize| ((i * k + j) % 100) as f64;
        let b_at = |i: usize, j: usize| ((i * n + j) % 100) as f64;

        let a = Matrix::from_fn(m, k, a_at).unwrap();
        let b = Matrix::from_fn(k, n, b_at).unwrap();
        let mut out = Matrix::allocate(m, n).unwrap();

        let ja = JaggedMatrix::from_fn(m, k, a_at).unwrap();
        let jb = JaggedMatrix::from_fn(k, n, b_at).unwrap();
        let mut jout = JaggedMatrix::allocate(m, n).unwrap();

        group.throughput(Throughput::Elements((2 * m * n * k) as u64));

        group.bench_with_input(BenchmarkId::new("naive_ijk", size), &size, |bench, _| {
            bench.iter(|| {
                matmul_ijk(
                    black_box(a.as_slice()),
                    black_box(b.as_slice()),
                    out.as_mut_slice(),
                    m,
                    n,
                    k,
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("jagged_ijk", size), &size, |bench, _| {
            bench.iter(|| multiply_jagged(black_box(&ja), black_box(&jb), &mut jout))
        });

        group.bench_with_input(BenchmarkId::new("ikj", size), &size, |bench, _| {
            bench.iter(|| {
                matmul_ikj(
                    black_box(a.as_slice()),
                    black_box(b.as_slice()),
                    out.as_mut_slice(),
                    m,
                    n,
                    k,
                )
            })
        });
    }

    group.finish();
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for len in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(len as u64));
        for policy in [GrowthPolicy::ExactFit, GrowthPolicy::Doubling] {
            let id = BenchmarkId::new(format!("{policy:?}"), len);
            group.bench_with_input(id, &len, |bench, &len| {
                bench.iter(|| {
                    let mut squares = GrowableBuffer::with_policy(policy);
                    for i in 0..len {
                        let x = i as f64;
                        squares.append(black_box(x * x)).unwrap();
                    }
                    squares
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_matmul, bench_append);
criterion_main!(benches);
