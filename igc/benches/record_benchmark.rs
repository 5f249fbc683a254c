use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use igc::records::{ARecord, BRecord, IRecord, Record};

const IDENTIFICATION: &str = "AXCT54Ff734e8955a067";
const FIX_EXTENSIONS: &str = "I033636LAD3737LOD3840ENL";
const FIX: &str = "B1135265439791N03758059EA0018200202";
const EXTENDED_FIX: &str = "B1135265439791N03758059EA001820020257012";

fn bench_records(c: &mut Criterion) {
    c.bench_function("identification", |b| {
        b.iter(|| ARecord::try_from(black_box(IDENTIFICATION)))
    });

    c.bench_function("fix extensions", |b| {
        b.iter(|| IRecord::try_from(black_box(FIX_EXTENSIONS)))
    });

    c.bench_function("fix", |b| b.iter(|| BRecord::try_from(black_box(FIX))));
}

/// Benchmark to encode a decoded fix again
fn bench_encode(c: &mut Criterion) {
    let fix = BRecord::try_from(FIX).expect("fix should parse");

    c.bench_function("fix to String", |b| {
        b.iter(|| {
            let _: String = black_box(&fix).to_string();
        })
    });
}

/// Benchmark decoding the fixes of a flight with a declared layout
fn bench_flight(c: &mut Criterion) {
    let layout = IRecord::try_from(FIX_EXTENSIONS)
        .expect("fix extensions should parse")
        .extensions;
    let lines: Vec<&str> = std::iter::repeat(EXTENDED_FIX).take(10_000).collect();
    let bytes: usize = lines.iter().map(|line| line.len()).sum();

    let mut group = c.benchmark_group("flight");
    group.throughput(Throughput::Bytes(bytes as u64));

    group.bench_function("fixes", |b| {
        b.iter(|| {
            let mut count = 0;
            for line in &lines {
                if Record::decode_with(line, Some(&layout)).is_ok() {
                    count += 1;
                }
            }
            black_box(count)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_records, bench_encode, bench_flight);
criterion_main!(benches);
