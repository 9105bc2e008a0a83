//! Latency benchmark for the transform-and-score path
//!
//! Run with: cargo bench -p churncast-inference

use churncast_core::{CustomerRecord, FormSchema};
use churncast_inference::{ArtifactConfig, ChurnPredictor};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::path::PathBuf;

fn vault_predictor() -> ChurnPredictor {
    let vault = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../vault");
    let config = ArtifactConfig {
        preprocessor: vault.join("churn_preprocessor.json"),
        model: vault.join("churn_model.json"),
    };
    ChurnPredictor::load(&config).expect("vault artifacts should load")
}

fn benchmark_predict(c: &mut Criterion) {
    let predictor = vault_predictor();

    let defaults = FormSchema::default_record();
    let at_risk = CustomerRecord {
        support_calls: 9.0,
        payment_delay: 25.0,
        tenure: 3.0,
        contract_length: "Monthly".to_string(),
        ..FormSchema::default_record()
    };
    let loyal = CustomerRecord {
        tenure: 96.0,
        support_calls: 0.0,
        payment_delay: 0.0,
        contract_length: "Annual".to_string(),
        tenure_group: "3+ Years".to_string(),
        ..FormSchema::default_record()
    };

    let cases = vec![
        ("defaults", defaults),
        ("at_risk", at_risk),
        ("loyal", loyal),
    ];

    let mut group = c.benchmark_group("ChurnPredictor");
    group.sample_size(100);

    for (name, record) in cases {
        group.bench_with_input(BenchmarkId::new("predict", name), &record, |b, record| {
            b.iter(|| predictor.predict(black_box(record)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_predict);
criterion_main!(benches);
