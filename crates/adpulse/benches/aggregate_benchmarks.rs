//! Benchmarks for the aggregation pipeline.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use adpulse::{MetricsEngine, Row};

/// Build a synthetic export with mixed locale formatting.
fn synthetic_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let day = format!("2024-{:02}-{:02}", (i / 28) % 12 + 1, i % 28 + 1);
            let spend = if i % 2 == 0 {
                format!("{},{:02}", 100 + i % 400, i % 100)
            } else {
                format!("{}.{:02}", 100 + i % 400, i % 100)
            };
            Row::new()
                .with("Day", day)
                .with("Amount spent", spend)
                .with("Impressions", format!("{}", 5_000 + i % 20_000))
                .with("Clicks (all)", format!("{}", 50 + i % 400))
                .with("Purchases", format!("{}", i % 4))
                .with("Leads", format!("{}", i % 3))
                .with("Results", format!("{}", i % 6))
                .with("Frequency", "2.4")
        })
        .collect()
}

fn bench_analyze(c: &mut Criterion) {
    let engine = MetricsEngine::new();
    let rows_1k = synthetic_rows(1_000);
    let rows_10k = synthetic_rows(10_000);

    c.bench_function("analyze_1k_rows", |b| {
        b.iter(|| engine.analyze(black_box(&rows_1k)))
    });

    c.bench_function("analyze_10k_rows", |b| {
        b.iter(|| engine.analyze(black_box(&rows_10k)))
    });
}

fn bench_numeric_normalizer(c: &mut Criterion) {
    use adpulse::{CellValue, parse_number};

    let samples = [
        CellValue::Text("1.234,56".to_string()),
        CellValue::Text("1,234.56".to_string()),
        CellValue::Text("€450,75".to_string()),
        CellValue::Number(1234.56),
    ];

    c.bench_function("parse_number_mixed_locales", |b| {
        b.iter(|| {
            for sample in &samples {
                black_box(parse_number(black_box(sample)));
            }
        })
    });
}

criterion_group!(benches, bench_analyze, bench_numeric_normalizer);
criterion_main!(benches);
