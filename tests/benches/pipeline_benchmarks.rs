//! # Block Validation Benchmarks
//!
//! | Group | Measures |
//! |-------|----------|
//! | `compute` | merkle root and distance on the reference engines |
//! | `pipeline` | full short-circuit validation by block size |
//! | `rejection` | cost of early rejection vs. full validation |
//! | `batch` | rayon batch validation throughput |

use std::sync::Arc;
use std::time::Duration;

use bc_block_validation::{BlockValidationApi, NoopObserver, ValidationConfig, ValidationPipeline};
use bc_compute::backends::sequential::SequentialEngine;
use bc_compute::{auto_detect, blake2bl, ComputeEngine, WorkValue};
use bc_tests::fixtures;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn quiet_pipeline(engine: Arc<dyn ComputeEngine>) -> ValidationPipeline {
    ValidationPipeline::new(fixtures::genesis(), engine)
        .with_observer(Arc::new(NoopObserver))
        .with_config(ValidationConfig {
            record_metrics: false,
            ..Default::default()
        })
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    for size in [8usize, 64, 512, 4096] {
        let items: Vec<String> = (0..size).map(|i| format!("item-{i}")).collect();
        group.throughput(Throughput::Elements(size as u64));

        let sequential = SequentialEngine;
        group.bench_with_input(BenchmarkId::new("merkle_sequential", size), &items, |b, items| {
            b.iter(|| black_box(sequential.merkle_root(items).unwrap()))
        });

        let cpu = auto_detect();
        group.bench_with_input(BenchmarkId::new("merkle_auto", size), &items, |b, items| {
            b.iter(|| black_box(cpu.merkle_root(items).unwrap()))
        });
    }

    let work = WorkValue::new(blake2bl(b"work"));
    let digest = blake2bl(b"digest");
    group.bench_function("distance", |b| {
        b.iter(|| black_box(SequentialEngine.distance(&work, &digest).unwrap()))
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.measurement_time(Duration::from_secs(10));
    let pipeline = quiet_pipeline(auto_detect());

    for (per_chain, txs) in [(1usize, 0usize), (4, 100), (16, 1_000)] {
        let block = fixtures::block(10_000, per_chain, txs);
        let id = format!("{per_chain}x5_headers_{txs}_txs");
        group.bench_with_input(BenchmarkId::new("is_valid_block", id), &block, |b, block| {
            b.iter(|| black_box(pipeline.is_valid_block(block).unwrap()))
        });
    }

    group.finish();
}

fn bench_rejection(c: &mut Criterion) {
    let mut group = c.benchmark_group("rejection");
    let pipeline = quiet_pipeline(auto_detect());

    let valid = fixtures::block(20_000, 8, 500);
    let mut bad_fingerprint = valid.clone();
    bad_fingerprint.blockchain_fingerprints_root = "wrong".into();
    let mut bad_distance = valid.clone();
    bad_distance.nonce = "wrong".into();

    for (name, block) in [
        ("full_validation", &valid),
        ("fingerprint_reject", &bad_fingerprint),
        ("distance_reject", &bad_distance),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(pipeline.is_valid_block(block).unwrap()))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.measurement_time(Duration::from_secs(10));
    let pipeline = quiet_pipeline(auto_detect());

    for size in [16usize, 128] {
        let blocks: Vec<_> = (1..=size as u64).map(|h| fixtures::block(h, 2, 50)).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("validate_batch", size), &blocks, |b, blocks| {
            b.iter(|| black_box(pipeline.validate_batch(blocks)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute, bench_pipeline, bench_rejection, bench_batch);
criterion_main!(benches);
