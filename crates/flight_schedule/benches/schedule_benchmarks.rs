//! Criterion benchmarks for flight_schedule normalisation.
//!
//! Measures descriptor parsing, week consolidation over growing flights, and
//! batch line planning to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flight_core::types::Date;
use flight_schedule::prelude::*;

/// Representative air-time strings seen on order sheets.
const TIME_SAMPLES: [&str; 8] = [
    "6:00a-7:00a",
    "7-730p",
    "11-130p",
    "1130-12p",
    "11:00p-1a",
    "4p-5p; 6p-7p",
    "18:00-20:00",
    "see attached",
];

/// Representative weekday descriptors.
const DAY_SAMPLES: [&str; 8] = [
    "M-F",
    "Sa-Su",
    "MTuWThF",
    "Mon thru Fri",
    "M-F, Sa-Su",
    "F-M",
    "weekends",
    "per schedule",
];

fn flight_start() -> Date {
    Date::from_ymd(2025, 1, 6).unwrap()
}

/// Generate a week series with a count change every few weeks and some dark weeks.
fn generate_counts(weeks: usize) -> Vec<u32> {
    (0..weeks)
        .map(|i| match (i / 4) % 4 {
            0 => 3,
            1 => 5,
            2 => 0,
            _ => 2,
        })
        .collect()
}

/// Benchmark descriptor parsing.
fn bench_descriptor_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("descriptor_parsing");

    group.bench_function("parse_time_range", |b| {
        b.iter(|| {
            for text in TIME_SAMPLES {
                black_box(parse_time_range(black_box(text)));
            }
        });
    });

    group.bench_function("resolve_day_pattern", |b| {
        b.iter(|| {
            for text in DAY_SAMPLES {
                black_box(resolve_day_pattern(black_box(text)));
            }
        });
    });

    group.finish();
}

/// Benchmark consolidation across flight lengths.
fn bench_consolidation(c: &mut Criterion) {
    let mut group = c.benchmark_group("consolidation");

    for weeks in [13, 52, 520] {
        let slots = weekly_slots(flight_start(), &generate_counts(weeks));
        let flight_end = flight_start().add_weeks(weeks as i64).add_days(-1);

        group.bench_with_input(BenchmarkId::new("consolidate", weeks), &slots, |b, slots| {
            b.iter(|| consolidate_weeks(black_box(slots), flight_end));
        });

        let runs = consolidate_weeks(&slots, flight_end);
        group.bench_with_input(BenchmarkId::new("expand", weeks), &runs, |b, runs| {
            b.iter(|| expand_runs(black_box(runs), &slots));
        });
    }

    group.finish();
}

/// Benchmark whole-line planning, single and batched.
fn bench_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("planning");
    let planner = LinePlanner::default();

    for lines in [10, 100, 1000] {
        let weeks = 13;
        let slots = weekly_slots(flight_start(), &generate_counts(weeks));
        let flight_end = flight_start().add_weeks(weeks as i64).add_days(-1);
        let batch: Vec<RawLine> = (0..lines)
            .map(|i| {
                RawLine::new(
                    DAY_SAMPLES[i % DAY_SAMPLES.len()],
                    TIME_SAMPLES[i % TIME_SAMPLES.len()],
                    slots.clone(),
                    flight_start(),
                    flight_end,
                )
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("plan_all", lines), &batch, |b, batch| {
            b.iter(|| planner.plan_all(black_box(batch)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_descriptor_parsing,
    bench_consolidation,
    bench_planning
);
criterion_main!(benches);
