// ABOUTME: Integration tests for BMI calculation and category classification
// ABOUTME: Covers boundary values, degenerate heights, and combined reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::errors::ErrorCode;
use fittrack::metrics::{calculate_bmi, calculate_bmi_category, BmiReport};
use fittrack::models::BmiCategory;

#[test]
fn test_bmi_uses_height_in_meters() {
    let bmi = calculate_bmi(70.0, 175.0).unwrap();
    assert!((bmi - 22.857_142_857).abs() < 1e-6);
}

#[test]
fn test_bmi_rejects_zero_and_negative_height() {
    for height in [0.0, -0.0, -170.0] {
        let err = calculate_bmi(70.0, height).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange, "height {height}");
    }
}

#[test]
fn test_bmi_rejects_non_finite_inputs() {
    assert_eq!(
        calculate_bmi(70.0, f64::NAN).unwrap_err().code,
        ErrorCode::InvalidInput
    );
    assert_eq!(
        calculate_bmi(f64::INFINITY, 175.0).unwrap_err().code,
        ErrorCode::InvalidInput
    );
    assert_eq!(
        calculate_bmi(-1.0, 175.0).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
}

#[test]
fn test_bmi_category_boundaries_include_lower_bound() {
    let cases = [
        (0.0, BmiCategory::Underweight),
        (18.499, BmiCategory::Underweight),
        (18.5, BmiCategory::Normal),
        (24.999, BmiCategory::Normal),
        (25.0, BmiCategory::Overweight),
        (29.999, BmiCategory::Overweight),
        (30.0, BmiCategory::Obese),
        (55.0, BmiCategory::Obese),
    ];
    for (bmi, expected) in cases {
        assert_eq!(calculate_bmi_category(bmi).unwrap(), expected, "bmi {bmi}");
    }
}

#[test]
fn test_bmi_category_rejects_negative_and_nan() {
    assert_eq!(
        calculate_bmi_category(-0.1).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    assert_eq!(
        calculate_bmi_category(f64::NAN).unwrap_err().code,
        ErrorCode::InvalidInput
    );
}

#[test]
fn test_bmi_categories_are_ordered() {
    assert!(BmiCategory::Underweight < BmiCategory::Normal);
    assert!(BmiCategory::Normal < BmiCategory::Overweight);
    assert!(BmiCategory::Overweight < BmiCategory::Obese);
    assert!((BmiCategory::Overweight.lower_bound() - 25.0).abs() < f64::EPSILON);
}

#[test]
fn test_bmi_report_combines_value_and_category() {
    let report = BmiReport::from_measurements(95.0, 180.0).unwrap();
    assert!((report.bmi - 29.32).abs() < 0.01);
    assert_eq!(report.category, BmiCategory::Overweight);

    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["category"], "overweight");
}

#[test]
fn test_bmi_overflow_is_rejected_instead_of_infinite() {
    assert_eq!(
        calculate_bmi(70.0, 1e-160).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    assert_eq!(
        calculate_bmi(1e308, 1.0).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    assert!(BmiReport::from_measurements(70.0, 1e-160).is_err());
}

#[test]
fn test_bmi_category_parses_case_insensitively() {
    for category in [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ] {
        assert_eq!(category.to_string().parse::<BmiCategory>().unwrap(), category);
    }
    assert_eq!(" OBESE ".parse::<BmiCategory>().unwrap(), BmiCategory::Obese);
    assert_eq!(
        "morbid".parse::<BmiCategory>().unwrap_err().code,
        ErrorCode::InvalidInput
    );
}
