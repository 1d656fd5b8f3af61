//! Benchmarks for validator composition
//!
//! Measures:
//! - Leaf validators on the happy path
//! - Early exit against accumulation when several children fail
//! - Cost of type erasure and lifting to async

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use futures::executor::block_on;
use tessera_validator::prelude::*;

fn leaf_validators(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf");

    let positive = greater_than(0_i64);
    group.bench_function("greater_than", |b| {
        b.iter(|| positive.validate(black_box(&42)));
    });

    let at_sign = contains::<str, _>('@');
    group.bench_function("contains_char", |b| {
        b.iter(|| at_sign.validate(black_box("blob@example.com")));
    });

    let address = email();
    group.bench_function("email", |b| {
        b.iter(|| address.validate(black_box("blob@example.com")));
    });

    group.finish();
}

fn policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy");

    for input in [50_i32, -1] {
        let early_exit = sequence((
            greater_than(0),
            less_than(100),
            not(equals(13)),
            greater_than(-10),
        ));
        group.bench_with_input(BenchmarkId::new("early_exit", input), &input, |b, n| {
            b.iter(|| early_exit.validate(black_box(n)));
        });

        let collecting = accumulate((
            greater_than(0),
            less_than(100),
            not(equals(13)),
            greater_than(-10),
        ));
        group.bench_with_input(BenchmarkId::new("accumulate", input), &input, |b, n| {
            b.iter(|| collecting.validate(black_box(n)));
        });

        let alternatives = one_of((equals(7), greater_than(100), less_than(-100), equals(50)));
        group.bench_with_input(BenchmarkId::new("one_of", input), &input, |b, n| {
            b.iter(|| alternatives.validate(black_box(n)));
        });
    }

    group.finish();
}

fn erasure(c: &mut Criterion) {
    let mut group = c.benchmark_group("erasure");

    let concrete = greater_than(0).and(less_than(100)).labeled_inline("score");
    let erased = greater_than(0).and(less_than(100)).labeled_inline("score").erase();

    group.bench_function("concrete", |b| {
        b.iter(|| concrete.validate(black_box(&-5)));
    });
    group.bench_function("erased", |b| {
        b.iter(|| erased.validate(black_box(&-5)));
    });
    group.bench_function("lifted_async", |b| {
        let lifted = lift(&concrete);
        b.iter(|| block_on(lifted.validate_async(black_box(&-5))));
    });

    group.finish();
}

criterion_group!(benches, leaf_validators, policies, erasure);
criterion_main!(benches);
