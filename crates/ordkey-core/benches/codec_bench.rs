//! Benchmarks for the key codecs.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::Rng;

use ordkey_core::encoding::{double, int64, string};
use ordkey_core::KeyReader;

/// Benchmark fixed-width encode/decode.
fn bench_fixed_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_width");
    group.throughput(Throughput::Elements(1));

    group.bench_function("encode_i64", |b| b.iter(|| int64::encode_i64(black_box(-1234))));
    group.bench_function("decode_i64", |b| {
        let key = int64::encode_i64(-1234);
        b.iter(|| int64::decode_i64(black_box(&key)).unwrap());
    });
    group.bench_function("encode_f64", |b| b.iter(|| double::encode_f64(black_box(-4.01))));
    group.bench_function("decode_f64", |b| {
        let key = double::encode_f64(-4.01);
        b.iter(|| double::decode_f64(black_box(&key)).unwrap());
    });

    group.finish();
}

/// Benchmark string encoding across lengths.
fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("string");

    for len in [8usize, 64, 512] {
        let value = "k".repeat(len);
        let key = string::encode_str(&value).unwrap();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(format!("encode_{len}"), |b| {
            b.iter(|| string::encode_str(black_box(&value)).unwrap());
        });
        group.bench_function(format!("decode_{len}"), |b| {
            b.iter(|| string::decode_str(black_box(&key)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark sorting encoded keys against sorting the values.
fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_1000");
    let mut rng = rand::thread_rng();
    let values: Vec<f64> = (0..1000).map(|_| rng.gen_range(-1.0e9..1.0e9)).collect();
    let keys: Vec<[u8; 8]> = values.iter().map(|&v| double::encode_f64(v)).collect();

    group.bench_function("values_total_cmp", |b| {
        b.iter(|| {
            let mut v = values.clone();
            v.sort_by(f64::total_cmp);
            v
        });
    });
    group.bench_function("encoded_keys", |b| {
        b.iter(|| {
            let mut k = keys.clone();
            k.sort_unstable();
            k
        });
    });

    group.finish();
}

/// Benchmark sequential reads from one packed buffer.
fn bench_reader(c: &mut Criterion) {
    let mut buf = Vec::new();
    for i in 0..100i64 {
        int64::encode_i64_into(i, &mut buf);
        string::encode_str_into("segment", &mut buf).unwrap();
    }

    c.bench_function("reader_200_values", |b| {
        b.iter(|| {
            let mut reader = KeyReader::new(black_box(&buf));
            while !reader.is_empty() {
                black_box(reader.read_i64().unwrap());
                black_box(reader.read_str().unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_fixed_width, bench_strings, bench_sort, bench_reader);
criterion_main!(benches);
