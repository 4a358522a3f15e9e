//! Benchmark for the schedule parse + gap scan pipeline.

use chrono::{TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use rest_engine::find_longest_gap;
use std::hint::black_box;

const MIXED_WEEK: &str = "Sun 10:00-20:00
Fri 05:00-10:00
Fri 16:30-23:50
Sat 10:00-24:00
Sun 01:00-04:00
Sat 02:00-06:00
Tue 03:30-18:15
Tue 19:00-20:00
Wed 04:25-15:14
Wed 15:14-22:40
Thu 00:00-23:59
Mon 05:00-13:00
Mon 15:00-21:00";

fn bench_find_longest_gap(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2026, 3, 16, 8, 0, 0).unwrap();

    c.bench_function("find_longest_gap/mixed_week", |b| {
        b.iter(|| find_longest_gap(black_box(now), black_box(MIXED_WEEK)))
    });

    // Dense week: every day split into back-to-back hour meetings.
    let dense: String = (0..7usize)
        .flat_map(|day| {
            let name = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"][day];
            (0..24).map(move |h| {
                let end = if h == 23 {
                    "24:00".to_string()
                } else {
                    format!("{:02}:00", h + 1)
                };
                format!("{} {:02}:00-{}", name, h, end)
            })
        })
        .collect::<Vec<_>>()
        .join("\n");

    c.bench_function("find_longest_gap/dense_week", |b| {
        b.iter(|| find_longest_gap(black_box(now), black_box(dense.as_str())))
    });
}

criterion_group!(benches, bench_find_longest_gap);
criterion_main!(benches);
