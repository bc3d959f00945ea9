use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use careernav_careers::{CareerId, CareerInput, CareerSelection};
use careernav_core::{AnnualEarnings, RiskLevel};
use careernav_projection::{
    CompoundingMode, GrowthModel, ProjectionRequest, ProjectionRunner, ProjectionSettings, project,
    summarize,
};

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");
    let base = AnnualEarnings::new(100_000.0).unwrap();
    let risk = RiskLevel::new(4).unwrap();

    for mode in [CompoundingMode::SingleStep, CompoundingMode::PerYear] {
        for &sims in &[1_000usize, 10_000, 100_000] {
            let model = GrowthModel {
                compounding: mode,
                ..GrowthModel::default()
            };
            group.throughput(Throughput::Elements(sims as u64));
            group.bench_with_input(BenchmarkId::new(format!("{mode:?}"), sims), &sims, |b, &sims| {
                let mut rng = StdRng::seed_from_u64(42);
                b.iter(|| project(base, risk, black_box(sims), 10, &model, &mut rng).unwrap());
            });
        }
    }
    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let values = project(
        AnnualEarnings::new(80_000.0).unwrap(),
        RiskLevel::new(6).unwrap(),
        100_000,
        10,
        &GrowthModel::default(),
        &mut rng,
    )
    .unwrap();

    c.bench_function("summarize_100k_30_bins", |b| {
        b.iter(|| summarize(black_box(&values), 30))
    });
}

fn bench_full_run(c: &mut Criterion) {
    let careers = CareerSelection::new(
        CareerId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| {
                CareerInput::new(
                    id.label(),
                    AnnualEarnings::new(50_000.0 + 25_000.0 * i as f64).unwrap(),
                    RiskLevel::new(2 + i as u8).unwrap(),
                )
            })
            .collect(),
    )
    .unwrap();
    let request = ProjectionRequest::new(careers)
        .with_settings(ProjectionSettings::default())
        .with_seed(1);
    let runner = ProjectionRunner::new();

    c.bench_function("run_all_catalogued_careers", |b| {
        b.iter(|| runner.run(black_box(&request)).unwrap())
    });
}

criterion_group!(benches, bench_project, bench_summarize, bench_full_run);
criterion_main!(benches);
