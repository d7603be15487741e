use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use herkbench_blas::{level1, level3, Layout, Transpose, Uplo};
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_zdotc(c: &mut Criterion) {
    let mut group = c.benchmark_group("zdotc");
    let mut rng = StdRng::seed_from_u64(42);
    for &n in &[64, 256, 1024, 4096] {
        let x: Vec<Complex64> = (0..n)
            .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();
        let y = x.clone();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| level1::dotc(&x, &y));
        });
    }
    group.finish();
}

fn bench_dsyrk(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsyrk");
    let mut rng = StdRng::seed_from_u64(42);
    for &n in &[32, 64, 128, 256] {
        let k = n;
        let a: Vec<f64> = (0..n * k).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let mut c_mat = vec![0.0f64; n * n];
        group.throughput(Throughput::Elements((n * (n + 1) / 2 * k) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| {
                level3::herk(
                    Layout::ColMajor,
                    Uplo::Lower,
                    Transpose::NoTrans,
                    n,
                    k,
                    1.0,
                    &a,
                    n,
                    0.0,
                    &mut c_mat,
                    n,
                )
                .unwrap();
            });
        });
    }
    group.finish();
}

fn bench_zherk(c: &mut Criterion) {
    let mut group = c.benchmark_group("zherk");
    let mut rng = StdRng::seed_from_u64(42);
    for &n in &[32, 64, 128, 256] {
        let k = n;
        let a: Vec<Complex64> = (0..n * k)
            .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();
        let mut c_mat = vec![Complex64::new(0.0, 0.0); n * n];
        for trans in [Transpose::NoTrans, Transpose::ConjTrans] {
            let id = BenchmarkId::new(format!("{:?}", trans), n);
            group.bench_with_input(id, &n, |bench, &n| {
                bench.iter(|| {
                    level3::herk(
                        Layout::ColMajor,
                        Uplo::Upper,
                        trans,
                        n,
                        k,
                        1.0,
                        &a,
                        n,
                        1.0,
                        &mut c_mat,
                        n,
                    )
                    .unwrap();
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_zdotc, bench_dsyrk, bench_zherk);
criterion_main!(benches);
