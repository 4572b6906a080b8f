//! 表格格式化性能基准测试

use std::hint::black_box;

use chrono::{TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shortlink_console::models::{UrlOwner, UrlRecord};
use shortlink_console::presentation::UrlRow;
use shortlink_console::utils::{
    URL_TRUNCATE_LENGTH, format_click_count, format_relative_date_at, parse_timestamp,
    truncate_url,
};

fn record(i: usize) -> UrlRecord {
    UrlRecord {
        original_url: format!("https://example.com/articles/{}/{}", i, "segment".repeat(8)),
        short_code: format!("c{:05}", i),
        created_at: "2025-06-15T09:00:00Z".to_string(),
        expires_at: Some("2025-06-17T12:00:00+02:00".to_string()),
        is_permanent: false,
        click_count: i as u64,
        last_accessed: Some("2025-06-15T11:55:00".to_string()),
        owner: Some(UrlOwner {
            username: "alice".to_string(),
        }),
    }
}

// ============== 时间戳解析 ==============

fn bench_parse_timestamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters/parse_timestamp");

    for (name, value) in [
        ("utc_z", "2025-06-15T09:00:00Z"),
        ("offset", "2025-06-15T09:00:00.123+05:30"),
        ("naive", "2025-06-15T09:00:00"),
        ("invalid", "not a date"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), value, |b, v| {
            b.iter(|| parse_timestamp(black_box(v)));
        });
    }

    group.finish();
}

// ============== 单元格格式化 ==============

fn bench_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters/cells");
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    let long_url = format!("https://example.com/{}", "x".repeat(200));

    group.bench_function("truncate_url", |b| {
        b.iter(|| truncate_url(black_box(&long_url), URL_TRUNCATE_LENGTH));
    });
    group.bench_function("format_click_count", |b| {
        b.iter(|| format_click_count(black_box(12_345)));
    });
    group.bench_function("relative_date", |b| {
        b.iter(|| format_relative_date_at(black_box(Some("2025-06-14T12:00:00Z")), now));
    });

    group.finish();
}

// ============== 整页行构建 ==============

fn bench_page_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters/page_rows");
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();

    for size in [20usize, 50, 100] {
        let records: Vec<UrlRecord> = (0..size).map(record).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                records
                    .iter()
                    .map(|r| UrlRow::from_record_at(r, "http://sho.rt", now))
                    .collect::<Vec<_>>()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_timestamp, bench_cells, bench_page_rows);
criterion_main!(benches);
