use basex::{AlphabetsConfig, Codec};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn get_codec(name: &str) -> Codec {
    AlphabetsConfig::load_default().unwrap().codec(name).unwrap()
}

fn bench_encode(c: &mut Criterion) {
    for name in ["base2", "base58", "base1024"] {
        let codec = get_codec(name);
        let mut group = c.benchmark_group(format!("encode_{}", name));

        for size in [32, 256, 1024, 4096].iter() {
            group.throughput(Throughput::Bytes(*size as u64));
            let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();

            group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
                b.iter(|| codec.encode(black_box(data)));
            });
        }
        group.finish();
    }
}

fn bench_decode(c: &mut Criterion) {
    for name in ["base2", "base58", "base1024"] {
        let codec = get_codec(name);
        let mut group = c.benchmark_group(format!("decode_{}", name));

        for size in [32, 256, 1024, 4096].iter() {
            let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();
            let encoded = codec.encode(&data);

            group.throughput(Throughput::Bytes(*size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
                b.iter(|| codec.decode(black_box(encoded)).unwrap());
            });
        }
        group.finish();
    }
}

fn bench_leading_zeros(c: &mut Criterion) {
    let codec = get_codec("base58");
    let mut data = vec![0u8; 512];
    data.extend((0..512).map(|i| (i % 255 + 1) as u8));

    c.bench_function("encode_base58_half_zeros", |b| {
        b.iter(|| codec.encode(black_box(&data)))
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_leading_zeros);
criterion_main!(benches);
