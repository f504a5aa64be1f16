//! Benchmarks for per-event interaction work
//!
//! Run with: cargo bench -p kinetic-core
//!
//! Pointer moves and counter frames run at display rate, so these establish
//! baselines for:
//! - Tilt frame derivation and style rendering
//! - Counter sampling across easing curves
//! - Typewriter ticks over multi-byte strings

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kinetic_core::{
    Counter, CounterConfig, Easing, ElementRect, Point, StaticPreferences, Tilt, TiltConfig,
    Typewriter, TypewriterConfig,
};

// ============================================================================
// Tilt Benchmarks
// ============================================================================

fn bench_tilt(c: &mut Criterion) {
    let mut group = c.benchmark_group("tilt");
    let rect = ElementRect::new(40.0, 80.0, 320.0, 200.0);
    let mut tilt = Tilt::new(TiltConfig::default(), &StaticPreferences::unavailable()).unwrap();

    group.bench_function("pointer_move", |b| {
        let mut x = 0.0;
        b.iter(|| {
            x = (x + 7.0) % 400.0;
            black_box(tilt.pointer_move(rect, Point::new(x, 150.0)))
        })
    });

    group.bench_function("style", |b| {
        tilt.pointer_move(rect, Point::new(100.0, 100.0));
        b.iter(|| black_box(tilt.style()))
    });

    group.finish();
}

// ============================================================================
// Counter Benchmarks
// ============================================================================

fn bench_counter_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_sample");

    for easing in Easing::all() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", easing)),
            &easing,
            |b, &easing| {
                b.iter_batched(
                    || {
                        let mut counter = Counter::new(CounterConfig {
                            easing,
                            ..CounterConfig::to(1_000_000.0)
                        })
                        .unwrap();
                        counter.trigger();
                        counter
                    },
                    |mut counter| {
                        for ms in (0..2000).step_by(16) {
                            black_box(counter.sample(Duration::from_millis(ms)));
                        }
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

// ============================================================================
// Typewriter Benchmarks
// ============================================================================

fn bench_typewriter_cycle(c: &mut Criterion) {
    let config = TypewriterConfig::new(["Synchronisé ✓", "Cycling text", "日本語のテキスト"]);
    let machine = Typewriter::new(config).unwrap();

    c.bench_function("typewriter_full_cycle", |b| {
        b.iter_batched(
            || machine.clone(),
            |mut tw| {
                for _ in 0..90 {
                    black_box(tw.tick());
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_tilt, bench_counter_sample, bench_typewriter_cycle);
criterion_main!(benches);
