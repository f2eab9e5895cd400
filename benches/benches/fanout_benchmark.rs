//! Benchmarks for the windowed fan-out pipeline.
//!
//! Uses a synthetic in-process transport so the numbers reflect chunking,
//! scheduling, and reassembly overhead rather than network latency.

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fredline_bench::synthetic_page;
use fredline_fetch::{CancelToken, FetchError, FetchOptions, NoopObserver, RetryPolicy, fetch_range};
use fredline_types::{DateRange, WindowPolicy};

fn decade_range() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    )
    .unwrap()
}

fn bench_window_chunking(c: &mut Criterion) {
    let range = decade_range();

    c.bench_function("chunk_decade_into_months", |b| {
        b.iter(|| WindowPolicy::CalendarMonth.windows(std::hint::black_box(range)));
    });
}

fn bench_fetch_range(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let range = decade_range();

    let mut group = c.benchmark_group("fetch_range_120_windows");
    for concurrency in [1usize, 8, 32] {
        group.bench_with_input(
            BenchmarkId::from_parameter(concurrency),
            &concurrency,
            |b, &concurrency| {
                let options = FetchOptions {
                    window_policy: WindowPolicy::CalendarMonth,
                    concurrency,
                    retry: RetryPolicy::default(),
                };
                b.to_async(&runtime).iter(|| async {
                    fetch_range(
                        range,
                        |window| async move { Ok::<_, FetchError>(synthetic_page(window)) },
                        &options,
                        &NoopObserver,
                        &CancelToken::new(),
                    )
                    .await
                    .unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_window_chunking, bench_fetch_range);
criterion_main!(benches);
