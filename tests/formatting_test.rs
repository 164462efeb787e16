// ABOUTME: Integration tests for locale number formatting and text truncation
// ABOUTME: Covers grouping, fraction rounding, non-finite values, and multi-byte text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::formatting::{format_number, truncate_text};
use fittrack::Locale;

#[test]
fn test_format_number_groups_thousands() {
    assert_eq!(format_number(0.0, Locale::EnUs), "0");
    assert_eq!(format_number(12.0, Locale::EnUs), "12");
    assert_eq!(format_number(1000.0, Locale::EnUs), "1,000");
    assert_eq!(format_number(1_234_567.891, Locale::EnUs), "1,234,567.891");
    assert_eq!(format_number(1_234_567.891, Locale::EnGb), "1,234,567.891");
}

#[test]
fn test_format_number_german_separators() {
    assert_eq!(format_number(1_234_567.891, Locale::DeDe), "1.234.567,891");
    assert_eq!(format_number(0.5, Locale::DeDe), "0,5");
}

#[test]
fn test_format_number_rounds_to_three_fraction_digits() {
    assert_eq!(format_number(1.234_56, Locale::EnUs), "1.235");
    assert_eq!(format_number(2.5, Locale::EnUs), "2.5");
    assert_eq!(format_number(999.999_9, Locale::EnUs), "1,000");
}

#[test]
fn test_format_number_rounds_ties_away_from_zero() {
    assert_eq!(format_number(1.0625, Locale::EnUs), "1.063");
    assert_eq!(format_number(0.0625, Locale::EnUs), "0.063");
    assert_eq!(format_number(-1.0625, Locale::EnUs), "-1.063");
    assert_eq!(format_number(2.0005, Locale::DeDe), "2,001");
    assert_eq!(format_number(999.9995, Locale::EnUs), "1,000");
}

#[test]
fn test_format_number_large_magnitudes_use_decimal_spelling() {
    assert_eq!(
        format_number(1e23, Locale::EnUs),
        "100,000,000,000,000,000,000,000"
    );
    assert_eq!(
        format_number(1e21, Locale::DeDe),
        "1.000.000.000.000.000.000.000"
    );
    assert_eq!(format_number(0.000_4, Locale::EnUs), "0");
}

#[test]
fn test_format_number_negative_values() {
    assert_eq!(format_number(-1234.5, Locale::EnUs), "-1,234.5");
    assert_eq!(format_number(-1234.5, Locale::DeDe), "-1.234,5");
}

#[test]
fn test_format_number_non_finite() {
    assert_eq!(format_number(f64::NAN, Locale::EnUs), "NaN");
    assert_eq!(format_number(f64::INFINITY, Locale::DeDe), "∞");
    assert_eq!(format_number(f64::NEG_INFINITY, Locale::EnUs), "-∞");
}

#[test]
fn test_truncate_text_short_text_unchanged() {
    assert_eq!(truncate_text("Hello", 10), "Hello");
    assert_eq!(truncate_text("Hello", 5), "Hello");
    assert_eq!(truncate_text("", 0), "");
}

#[test]
fn test_truncate_text_appends_ellipsis() {
    assert_eq!(truncate_text("Hello world", 5), "Hello...");
    assert_eq!(truncate_text("Grilled salmon with quinoa", 14), "Grilled salmon...");
}

#[test]
fn test_truncate_text_zero_length() {
    assert_eq!(truncate_text("abc", 0), "...");
}

#[test]
fn test_truncate_text_never_splits_characters() {
    assert_eq!(truncate_text("héllo wörld", 7), "héllo w...");
    assert_eq!(truncate_text("💪💪💪", 2), "💪💪...");
}

#[test]
fn test_truncate_text_length_invariant() {
    let text = "Protein-packed overnight oats with berries";
    let total = text.chars().count();
    for max_length in 0..=total + 2 {
        let result = truncate_text(text, max_length);
        let count = result.chars().count();
        if total <= max_length {
            assert_eq!(result, text);
        } else {
            assert_eq!(count, max_length + 3);
            assert!(result.ends_with("..."));
            assert!(text.starts_with(&result[..result.len() - 3]));
        }
    }
}
