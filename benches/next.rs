//! Criterion benchmarks for selector hot paths.
//!
//! Each strategy holds 50 items with weights in 100..200 and is asked for
//! its next pick; exclusion-aware picks are measured separately.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use weighted_select::{ClassicWeighted, RandomWeighted, Selector, SmoothWeighted};

// ── Helpers ──────────────────────────────────────────────────────────

fn items() -> Vec<(String, i64)> {
    let mut rng = rand::thread_rng();
    (0..50)
        .map(|i| (format!("item-{}", i), rng.gen_range(100..200)))
        .collect()
}

fn filled<S: Selector<String>>(mut selector: S) -> S {
    for (item, weight) in items() {
        selector.add(item, weight).expect("positive weight");
    }
    selector
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("next");

    let mut sw = filled(SmoothWeighted::new());
    group.bench_function("smooth", |b| b.iter(|| black_box(sw.next())));

    let mut rr = filled(ClassicWeighted::new());
    group.bench_function("classic", |b| b.iter(|| black_box(rr.next())));

    let mut rw = filled(RandomWeighted::new());
    group.bench_function("random", |b| b.iter(|| black_box(rw.next())));

    group.finish();
}

fn bench_next_excluding(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_excluding");
    let exclusions = vec!["item-3".to_string(), "item-17".to_string(), "item-42".to_string()];

    let mut sw = filled(SmoothWeighted::new());
    group.bench_function("smooth", |b| b.iter(|| black_box(sw.next_excluding(&exclusions))));

    let mut rr = filled(ClassicWeighted::new());
    group.bench_function("classic", |b| b.iter(|| black_box(rr.next_excluding(&exclusions))));

    group.finish();
}

criterion_group!(benches, bench_next, bench_next_excluding);
criterion_main!(benches);
