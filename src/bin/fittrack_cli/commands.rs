// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors
// ABOUTME: Command implementations for fittrack-cli
// ABOUTME: Thin adapters from parsed arguments to library calls and display strings

use crate::output::Outcome;
use chrono::{DateTime, Utc};
use fittrack::calendar::{Calendar, Clock, FixedClock, SystemClock};
use fittrack::config::DisplayConfig;
use fittrack::errors::{AppError, AppResult};
use fittrack::formatting::{format_number as format_value, truncate_text};
use fittrack::metrics::{
    calculate_calories_burned, get_progress_trend, percent_change, BmiReport, OneRepMaxFormula,
};
use fittrack::models::Intensity;
use serde_json::json;
use std::sync::Arc;

pub fn bmi(weight_kg: f64, height_cm: f64, display: &DisplayConfig) -> AppResult<Outcome> {
    let report = BmiReport::from_measurements(weight_kg, height_cm)?;
    let rounded = (report.bmi * 10.0).round() / 10.0;
    Ok(Outcome::new(
        format!(
            "BMI {} ({})",
            format_value(rounded, display.locale),
            report.category
        ),
        json!({ "bmi": report.bmi, "category": report.category }),
    ))
}

pub fn calories(weight_kg: f64, minutes: u32, intensity: Intensity) -> AppResult<Outcome> {
    let calories = calculate_calories_burned(weight_kg, minutes, intensity)?;
    Ok(Outcome::new(
        format!("{calories} kcal burned in {minutes} min at {intensity} intensity"),
        json!({ "calories": calories, "minutes": minutes, "intensity": intensity }),
    ))
}

pub fn one_rep_max(weight: f64, reps: u32, formula: OneRepMaxFormula) -> AppResult<Outcome> {
    let estimate = formula.estimate(weight, reps)?.round();
    Ok(Outcome::new(
        format!("Estimated 1RM {estimate} ({}: {})", formula, formula.formula()),
        json!({ "one_rep_max": estimate, "reps": reps, "formula": formula }),
    ))
}

pub fn trend(current: f64, previous: f64, display: &DisplayConfig) -> AppResult<Outcome> {
    let change = percent_change(current, previous)?;
    let trend = get_progress_trend(current, previous)?;
    Ok(Outcome::new(
        format!("{trend} ({}%)", format_value(change, display.locale)),
        json!({ "trend": trend, "percent_change": change }),
    ))
}

pub fn format_number(value: f64, display: &DisplayConfig) -> Outcome {
    let formatted = format_value(value, display.locale);
    Outcome::new(
        formatted.clone(),
        json!({ "formatted": formatted, "locale": display.locale }),
    )
}

pub fn truncate(text: &str, max_length: usize) -> Outcome {
    let truncated = truncate_text(text, max_length);
    Outcome::new(
        truncated.clone(),
        json!({ "text": truncated, "truncated": truncated != text }),
    )
}

pub fn date(input: &str, now: Option<&str>, display: &DisplayConfig) -> AppResult<Outcome> {
    let clock: Arc<dyn Clock> = match now {
        Some(raw) => {
            let instant = DateTime::parse_from_rfc3339(raw).map_err(|e| {
                AppError::invalid_date(format!("--now '{raw}' is not RFC 3339: {e}"))
            })?;
            Arc::new(FixedClock::new(instant.with_timezone(&Utc)))
        }
        None => Arc::new(SystemClock),
    };
    let calendar = display.calendar(clock);
    let date = calendar.parse_date(input)?;
    let label = calendar.format_date(&date);
    Ok(Outcome::new(
        label.clone(),
        json!({
            "label": label,
            "day_of_week": calendar.day_of_week(&date),
            "is_today": calendar.is_today(&date),
            "is_tomorrow": calendar.is_tomorrow(&date),
        }),
    ))
}

pub fn time(input: &str, display: &DisplayConfig) -> AppResult<Outcome> {
    let calendar = Calendar::system(display.utc_offset, display.locale);
    let date = calendar.parse_date(input)?;
    let formatted = calendar.format_time(&date);
    Ok(Outcome::new(formatted.clone(), json!({ "time": formatted })))
}
