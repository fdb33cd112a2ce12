use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use smcrypt_algorithms::hash::{HashFunction, Sm3};
use smcrypt_algorithms::kdf::Sm3Kdf;

// Test data sizes
const SIZES: &[usize] = &[
    64,    // 1 block
    256,   // 4 blocks
    1024,  // 1 KB
    16384, // 16 KB
];

fn bench_sm3(c: &mut Criterion) {
    let mut group = c.benchmark_group("SM3");

    for &size in SIZES {
        let data = vec![0u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let digest = Sm3::digest(black_box(data)).unwrap();
                black_box(digest);
            });
        });
    }

    group.finish();
}

fn bench_sm3_kdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("SM3-KDF");
    // xV || yV || ZA || ZB
    let z = [0x5au8; 128];

    for &klen in &[16usize, 32, 48, 128] {
        group.throughput(Throughput::Bytes(klen as u64));
        group.bench_with_input(BenchmarkId::from_parameter(klen), &klen, |b, &klen| {
            b.iter(|| {
                let key = Sm3Kdf::derive(black_box(&z), klen).unwrap();
                black_box(key);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sm3, bench_sm3_kdf);
criterion_main!(benches);
