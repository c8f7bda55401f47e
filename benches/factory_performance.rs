// benches/factory_performance.rs
//! Benchmarks for the construction pipeline of coded_errors.
//!
//! Covers the full factory path for both locators plus the pieces it is
//! built from: composition, binding, rendering and the internal log.

use coded_errors::definitions::{self, pvc};
use coded_errors::template::{self, SubstitutionMap};
use coded_errors::{args, binder, TemplateArgs};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// ============================================================================
// Factory
// ============================================================================

fn bench_create_registry(c: &mut Criterion) {
    let factory = definitions::default_factory().unwrap();

    c.bench_function("create_registry_one_var", |b| {
        b.iter(|| black_box(factory.create(&pvc::INVALID_ARRAY_INDEX, args![black_box("(foo)")])))
    });

    c.bench_function("create_registry_three_vars", |b| {
        b.iter(|| {
            black_box(factory.create(
                &pvc::PREG_REPLACE_FAILURE,
                args!["some bad regex", "some subject", "some replacement"],
            ))
        })
    });
}

fn bench_create_scanning(c: &mut Criterion) {
    let factory = definitions::scanning_factory().unwrap();
    // Warm the cache so the loop measures hits.
    let _ = factory.create(&pvc::INVALID_ARRAY_INDEX, args!["warm"]);

    c.bench_function("create_scanning_cached", |b| {
        b.iter(|| black_box(factory.create(&pvc::INVALID_ARRAY_INDEX, args![black_box("(foo)")])))
    });
}

fn bench_create_named(c: &mut Criterion) {
    let factory = definitions::default_factory().unwrap();

    c.bench_function("create_named_args", |b| {
        b.iter(|| {
            black_box(factory.create_with(
                &pvc::PREG_MATCH_FAILURE,
                TemplateArgs::new().with("regex", "/x/").with("subject", "abc"),
            ))
        })
    });
}

fn bench_cause_chain(c: &mut Criterion) {
    let factory = definitions::default_factory().unwrap();
    let mut group = c.benchmark_group("cause_chain");

    for depth in [1usize, 4, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut err = factory.create(&pvc::INVALID_FILENAME, args!["f"]);
                for _ in 1..depth {
                    err = factory.create(&pvc::INVALID_ARRAY_INDEX, args![1, err]);
                }
                black_box(err.external_summary())
            })
        });
    }

    group.finish();
}

// ============================================================================
// Pipeline Pieces
// ============================================================================

fn bench_compose(c: &mut Criterion) {
    let factory = definitions::default_factory().unwrap();
    let composer = factory.composer();

    c.bench_function("compose", |b| {
        b.iter(|| black_box(composer.compose(black_box("pvc"), black_box(1001))))
    });
}

fn bench_bind_and_render(c: &mut Criterion) {
    let params = pvc::PREG_REPLACE_FAILURE.params();
    let template = "preg_replace failed: regex=${regex}; subject=${subject}; replacement=${replacement}";

    c.bench_function("bind_positional", |b| {
        b.iter(|| black_box(binder::bind(params, args!["r", "s", "t"], 3)))
    });

    let mut map = SubstitutionMap::new();
    map.insert("regex", "r");
    map.insert("subject", "s");
    map.insert("replacement", "t");

    c.bench_function("render_three_placeholders", |b| {
        b.iter(|| black_box(template::render(black_box(template), &map)))
    });

    c.bench_function("variable_count", |b| {
        b.iter(|| black_box(template::variable_count(black_box(template))))
    });
}

fn bench_internal_log_write(c: &mut Criterion) {
    let factory = definitions::default_factory().unwrap();
    let err = factory.create(&pvc::INVALID_ARRAY_INDEX, args!["(foo)"]);

    c.bench_function("internal_log_write_to", |b| {
        b.iter(|| {
            let mut buffer = String::new();
            err.internal_log().write_to(&mut buffer).unwrap();
            black_box(buffer)
        })
    });
}

criterion_group!(
    factory_benches,
    bench_create_registry,
    bench_create_scanning,
    bench_create_named,
    bench_cause_chain,
);

criterion_group!(
    pipeline_benches,
    bench_compose,
    bench_bind_and_render,
    bench_internal_log_write,
);

criterion_main!(factory_benches, pipeline_benches);
