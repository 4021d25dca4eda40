//! Criterion benchmarks for stratus-split: class-only and density-stratified splits.

use criterion::{Criterion, criterion_group, criterion_main};

use stratus_frame::{Column, Frame, RowId};
use stratus_split::SplitConfig;

/// 2000 records across 8 classes; one feature with two value bands per class.
fn make_frame() -> Frame {
    let n = 2000;
    let ids = (0..n)
        .map(|i| RowId::new(format!("r{i}")).unwrap())
        .collect();
    let labels: Vec<String> = (0..n).map(|i| format!("c{}", i % 8)).collect();
    let feature: Vec<f64> = (0..n)
        .map(|i| {
            let base = if (i / 8) % 2 == 0 { 0.0 } else { 50.0 };
            base + (i % 8) as f64 * 0.01
        })
        .collect();
    Frame::new(
        ids,
        vec![
            ("class".to_string(), Column::Categorical(labels)),
            ("x".to_string(), Column::Numeric(feature)),
        ],
    )
    .unwrap()
}

fn bench_class_only_split(c: &mut Criterion) {
    let frame = make_frame();
    let config = SplitConfig::new(vec![0.7, 0.2, 0.1])
        .unwrap()
        .with_class_column("class")
        .with_seed(42);

    c.bench_function("split_2000x8_class_only", |b| {
        b.iter(|| config.split(&frame).unwrap());
    });
}

fn bench_stratified_split(c: &mut Criterion) {
    let frame = make_frame();
    let config = SplitConfig::new(vec![0.7, 0.2, 0.1])
        .unwrap()
        .with_class_column("class")
        .with_stratify_columns(vec!["x".to_string()])
        .with_seed(42);

    c.bench_function("split_2000x8_density_stratified", |b| {
        b.iter(|| config.split(&frame).unwrap());
    });
}

criterion_group!(benches, bench_class_only_split, bench_stratified_split);
criterion_main!(benches);
