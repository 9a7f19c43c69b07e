//! Criterion benchmarks for epimeasures_core
//!
//! Run with: cargo bench -p epimeasures_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use epimeasures_core::chart::ChartFrame;
use epimeasures_core::chart::series::{cumulative_risk_series, risk_vs_rate_series, survival_curve};
use epimeasures_core::measures::life_table::{build_life_table, example_age_groups};
use epimeasures_core::measures::person_time::{Participant, compute_incidence_density};
use epimeasures_core::{compute_prevalence, compute_rate_risk, compute_ypll};

fn bench_calculators(c: &mut Criterion) {
    c.bench_function("rate_risk_calculator", |b| {
        b.iter(|| compute_rate_risk(black_box(50.0), black_box(500_000.0), black_box(100_000.0)))
    });

    c.bench_function("prevalence_model", |b| {
        b.iter(|| compute_prevalence(black_box(5.0), black_box(10.0)))
    });

    c.bench_function("ypll_ten_deaths", |b| {
        let ages = [1.0, 5.0, 12.0, 25.0, 33.0, 40.0, 58.0, 71.0, 80.0, 92.0];
        b.iter(|| compute_ypll(black_box(75.0), black_box(&ages)))
    });

    c.bench_function("life_table_example", |b| {
        let groups = example_age_groups();
        b.iter(|| build_life_table(black_box(100_000.0), black_box(&groups)))
    });
}

fn bench_incidence_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("incidence_density");

    for size in [3usize, 10, 1_000] {
        let participants: Vec<Participant> = (0..size)
            .map(|i| Participant::new(i as u32, (i % 10) as f64 + 0.5, i % 3 == 0))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &participants, |b, p| {
            b.iter(|| compute_incidence_density(black_box(p)))
        });
    }

    group.finish();
}

fn bench_chart_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_paths");

    group.bench_function("risk_vs_rate", |b| {
        let frame = ChartFrame::risk_vs_rate();
        b.iter(|| {
            let (risk, rate) = risk_vs_rate_series();
            (frame.svg_path(&risk.points), frame.svg_path(&rate.points))
        })
    });

    group.bench_function("survival", |b| {
        let frame = ChartFrame::survival();
        b.iter(|| frame.svg_path(&survival_curve().points))
    });

    group.bench_function("cumulative_risk", |b| {
        let frame = ChartFrame::cumulative_risk();
        b.iter(|| {
            let (unadjusted, adjusted) = cumulative_risk_series();
            (
                frame.svg_path(&unadjusted.points),
                frame.svg_path(&adjusted.points),
            )
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_calculators,
    bench_incidence_density,
    bench_chart_paths
);
criterion_main!(benches);
