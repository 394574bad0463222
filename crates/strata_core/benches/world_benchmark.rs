//! # World Performance Benchmark
//!
//! Timing scenarios for the storage engine:
//! - entity creation through the doubling growth path
//! - component adds across a populated world
//! - view iteration with sparse and dense kind sets
//!
//! Run with: `cargo bench --package strata_core`

// Benchmarks don't need docs and may have intentionally unused code
#![allow(missing_docs)]
#![allow(dead_code)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use strata_core::{registry, World};

/// Entity count for the populated-world scenarios.
const ENTITY_COUNT: usize = 8_000;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Translation {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Level {
    value: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Score {
    value: i32,
}

registry! {
    /// Kinds used by the benchmark world.
    registry Bench with columns BenchColumns {
        translations: Translation,
        levels: Level,
        scores: Score,
    }
}

type BenchWorld = World<Bench>;

/// Populates a world with a mixed kind distribution: every entity gets a
/// level, every second one a score, every 99th a translation.
fn populated_world(count: usize) -> BenchWorld {
    let mut world = BenchWorld::new();
    for _ in 0..count {
        world.new_entity();
    }
    let ids: Vec<usize> = world.iter().collect();
    for id in ids {
        world.add(id, Level { value: (id % 10) as i32 });
        if id % 2 == 0 {
            world.add(id, Score { value: (id % 100) as i32 });
        }
        if id % 99 == 0 {
            world.add(id, Translation { x: id as f32, y: 0.0, z: 0.0 });
        }
    }
    world
}

/// Benchmark: create entities through the growth path.
fn bench_entity_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("entity_creation");

    for count in [1_000, ENTITY_COUNT] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut world = BenchWorld::new();
                for _ in 0..count {
                    black_box(world.new_entity());
                }
                world.size()
            });
        });
    }

    group.finish();
}

/// Benchmark: add components to every live entity.
fn bench_component_add(c: &mut Criterion) {
    c.bench_function("component_add_8K", |b| {
        b.iter(|| {
            let world = populated_world(ENTITY_COUNT);
            black_box(world.size())
        });
    });
}

/// Benchmark: iterate a sparse view (one entity in 99 qualifies).
fn bench_sparse_view(c: &mut Criterion) {
    let world = populated_world(ENTITY_COUNT);

    c.bench_function("view_sparse_8K", |b| {
        b.iter(|| {
            let mut sum = 0.0_f32;
            for id in world.view::<(Translation,)>() {
                if let Some((translation,)) = world.get::<(Translation,)>(id) {
                    sum += translation.x;
                }
            }
            black_box(sum)
        });
    });
}

/// Benchmark: iterate a two-kind view and read both bundles.
fn bench_dense_view(c: &mut Criterion) {
    let world = populated_world(ENTITY_COUNT);

    c.bench_function("view_dense_8K", |b| {
        b.iter(|| {
            let mut sum = 0_i64;
            for id in world.view::<(Level, Score)>() {
                if let Some((level, score)) = world.get::<(Level, Score)>(id) {
                    sum += i64::from(level.value) + i64::from(score.value);
                }
            }
            black_box(sum)
        });
    });
}

/// Benchmark: delete/recreate cycle exercising lowest-free-id reuse.
fn bench_delete_recreate_cycle(c: &mut Criterion) {
    c.bench_function("delete_recreate_1K", |b| {
        let mut world = BenchWorld::new();
        for _ in 0..ENTITY_COUNT {
            world.new_entity();
        }
        b.iter(|| {
            for id in 0..1_000 {
                world.delete_entity(id);
            }
            for _ in 0..1_000 {
                black_box(world.new_entity());
            }
            world.size()
        });
    });
}

/// Benchmark: whole-column batch write, the ceiling for any per-id path.
fn bench_column_batch_write(c: &mut Criterion) {
    let mut world = populated_world(ENTITY_COUNT);

    c.bench_function("column_batch_write_8K", |b| {
        b.iter(|| {
            for slot in world.column_mut::<Level>() {
                slot.value += 1;
            }
            black_box(world.size())
        });
    });
}

criterion_group!(
    benches,
    bench_entity_creation,
    bench_component_add,
    bench_sparse_view,
    bench_dense_view,
    bench_delete_recreate_cycle,
    bench_column_batch_write,
);

criterion_main!(benches);
