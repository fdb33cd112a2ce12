// Benchmarks for sm2p256v1 curve arithmetic

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::OsRng, RngCore};
use smcrypt_algorithms::ec::sm2::{self, FieldElement, Point, Scalar, SM2_SCALAR_SIZE};

/// Generate a random scalar for benchmarking
fn random_scalar() -> Scalar {
    let mut bytes = [0u8; SM2_SCALAR_SIZE];
    loop {
        OsRng.fill_bytes(&mut bytes);
        if let Ok(scalar) = Scalar::new(bytes) {
            return scalar;
        }
    }
}

/// Generate a random point on the curve
fn random_point() -> Point {
    let scalar = random_scalar();
    sm2::scalar_mult_base_g(&scalar)
}

fn bench_field_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("sm2-field");
    let g = sm2::base_point_g();
    let a = FieldElement::from_bytes(&g.x_coordinate_bytes()).unwrap();
    let b = FieldElement::from_bytes(&g.y_coordinate_bytes()).unwrap();

    group.bench_function("multiplication", |bench| {
        bench.iter(|| black_box(a.mul(black_box(&b))))
    });

    group.bench_function("inversion", |bench| {
        bench.iter(|| black_box(a.invert().unwrap()))
    });

    group.finish();
}

fn bench_point_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("sm2-point");

    group.bench_function("base_mult", |b| {
        b.iter_batched(
            random_scalar,
            |k| black_box(sm2::scalar_mult_base_g(&k)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("variable_mult", |b| {
        b.iter_batched(
            || (random_scalar(), random_point()),
            |(k, p)| black_box(sm2::scalar_mult(&k, &p)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("addition", |b| {
        b.iter_batched(
            || (random_point(), random_point()),
            |(p, q)| black_box(p.add(&q)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_keypair(c: &mut Criterion) {
    c.bench_function("sm2-generate_keypair", |b| {
        b.iter(|| black_box(sm2::generate_keypair(&mut OsRng).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_field_operations,
    bench_point_operations,
    bench_keypair
);
criterion_main!(benches);
