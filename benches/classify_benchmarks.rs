//! Performance benchmarks for tracking number classification.
//!
//! These benchmarks measure classification cost for:
//! - Each carrier format (including the last-evaluated pattern)
//! - Payloads that match nothing and fall through the whole table
//! - Payloads rejected by their symbology before matching

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tracking_classifier::{Symbology, TrackingNumberClassifier};

const PAYLOADS: &[(&str, &str)] = &[
    ("ups", "1Z999AA10123456784"),
    ("ups_surepost", "4201234592612927005055000000000015"),
    ("usps", "420 12345 9400 1000 0000 0000 0000 00"),
    ("fedex_20", "12345678901234567890"),
    ("fedex_12", "1111111111111111111111123456789012"),
    ("fedex_smartpost", "9261-2929-0000-0000-0000-00"),
    ("no_match", "https://example.com/products/036000291452?ref=shelf"),
];

/// Benchmark classification per carrier format.
fn bench_classify(c: &mut Criterion) {
    let classifier = TrackingNumberClassifier::new();
    let mut group = c.benchmark_group("classify");

    for (name, payload) in PAYLOADS {
        group.bench_with_input(BenchmarkId::from_parameter(name), payload, |b, payload| {
            b.iter(|| classifier.classify(black_box(payload), Some(Symbology::Code128)));
        });
    }

    group.finish();
}

/// Benchmark the symbology gate, which skips pattern matching entirely.
fn bench_ineligible(c: &mut Criterion) {
    let classifier = TrackingNumberClassifier::new();

    c.bench_function("classify_datamatrix", |b| {
        b.iter(|| classifier.classify(black_box("1Z999AA10123456784"), Some(Symbology::Datamatrix)));
    });
}

criterion_group!(benches, bench_classify, bench_ineligible);
criterion_main!(benches);
