//! Benchmarks for the blocker and two-stage matcher at scale, to keep the
//! millions-of-rows time budget honest.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use record_dedupe::{MatchingConfig, Pipeline, Record};

fn synthetic_dataset(size: u64) -> Vec<Record> {
    let surnames = ["meyer", "schmidt", "huber", "wagner", "becker"];
    let given_names = ["hans", "peter", "katharina", "anna", "stefan"];

    (0..size)
    .map(|i| {
            let mut r = Record::new(i);
            r.given_name = Some(given_names[(i % given_names.len() as u64) as usize].to_string());
            r.surname = Some(surnames[(i % surnames.len() as u64) as usize].to_string());
            r.postal_code = Some(format!("{:05}", 10000 + (i % 50)));
            r.street = Some("hauptstrasse".to_string());
            r
    })
    .collect()
}

fn bench_blocking_and_matching(c: &mut Criterion) {
    let dataset = synthetic_dataset(5_000);
    let pipeline = Pipeline::new(MatchingConfig::default()).unwrap();

    c.bench_function("pipeline_run_5k_records", |b| {
            b.iter(|| pipeline.run(black_box(&dataset)))
    });
}

fn bench_sequential_vs_parallel(c: &mut Criterion) {
    let dataset = synthetic_dataset(2_000);

    let mut parallel_config = MatchingConfig::default();
    parallel_config.use_parallel = true;
    let parallel = Pipeline::new(parallel_config).unwrap();

    let mut sequential_config = MatchingConfig::default();
    sequential_config.use_parallel = false;
    let sequential = Pipeline::new(sequential_config).unwrap();

    let mut group = c.benchmark_group("runner_mode");
    group.bench_function("parallel", |b| b.iter(|| parallel.run(black_box(&dataset))));
    group.bench_function("sequential", |b| {
            b.iter(|| sequential.run(black_box(&dataset)))
    });
    group.finish();
}

criterion_group!(benches, bench_blocking_and_matching, bench_sequential_vs_parallel);
criterion_main!(benches);
