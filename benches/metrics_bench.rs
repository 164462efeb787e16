// ABOUTME: Criterion benchmarks for metric calculations and formatting helpers
// ABOUTME: Measures BMI, calories, one-rep-max, trend, and label formatting throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Criterion benchmarks for FitTrack metric calculations.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, FixedOffset, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fittrack::calendar::{Calendar, FixedClock};
use fittrack::formatting::{format_number, truncate_text};
use fittrack::metrics::{
    calculate_bmi, calculate_bmi_category, calculate_calories_burned, get_progress_trend,
    OneRepMaxFormula,
};
use fittrack::models::Intensity;
use fittrack::Locale;

fn bench_body_metrics(c: &mut Criterion) {
    c.bench_function("bmi_with_category", |b| {
        b.iter(|| {
            let bmi = calculate_bmi(black_box(82.5), black_box(178.0));
            bmi.and_then(calculate_bmi_category)
        });
    });
}

fn bench_exercise_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_rep_max");
    for formula in [
        OneRepMaxFormula::Brzycki,
        OneRepMaxFormula::Epley,
        OneRepMaxFormula::Lombardi,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(formula), &formula, |b, f| {
            b.iter(|| f.estimate(black_box(120.0), black_box(8)));
        });
    }
    group.finish();

    c.bench_function("calories_burned", |b| {
        b.iter(|| calculate_calories_burned(black_box(70.0), black_box(45), Intensity::High));
    });

    c.bench_function("progress_trend", |b| {
        b.iter(|| get_progress_trend(black_box(81.2), black_box(82.5)));
    });
}

fn bench_formatting(c: &mut Criterion) {
    c.bench_function("format_number_en_us", |b| {
        b.iter(|| format_number(black_box(1_234_567.891), Locale::EnUs));
    });

    c.bench_function("truncate_text", |b| {
        b.iter(|| truncate_text(black_box("Protein-packed overnight oats with berries"), 20));
    });

    let Some(now) = Utc.with_ymd_and_hms(2025, 3, 24, 9, 0, 0).single() else {
        return;
    };
    let Some(utc) = FixedOffset::east_opt(0) else {
        return;
    };
    let calendar = Calendar::new(FixedClock::new(now), utc, Locale::EnUs);
    let dates: Vec<_> = (0..14).map(|days| now + Duration::days(days)).collect();
    c.bench_function("format_date_two_weeks", |b| {
        b.iter(|| {
            dates
                .iter()
                .map(|date| calendar.format_date(black_box(date)))
                .collect::<Vec<_>>()
        });
    });
}

criterion_group!(
    benches,
    bench_body_metrics,
    bench_exercise_metrics,
    bench_formatting
);
criterion_main!(benches);
