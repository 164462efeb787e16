// ABOUTME: FitTrack CLI - command-line front end over the metric and formatting utilities
// ABOUTME: Computes BMI, calories, one-rep-max, trends, and date labels as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors
//!
//! Usage:
//! ```bash
//! # BMI and category for 70 kg at 175 cm
//! fittrack-cli bmi --weight 70 --height 175
//!
//! # Calories for a 45 minute high-intensity session, weight recorded in pounds
//! fittrack-cli calories --weight 176 --unit lb --minutes 45 --intensity high
//!
//! # One-rep-max from 100 kg x 10 reps using Epley
//! fittrack-cli one-rep-max --weight 100 --reps 10 --formula epley
//!
//! # Trend between two weigh-ins, as JSON
//! fittrack-cli --json trend --current 81.2 --previous 82.5
//!
//! # Date label in German relative to a pinned "now"
//! fittrack-cli --locale de-DE date 2025-03-25 --now 2025-03-24T09:00:00Z
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fittrack::config::display::parse_utc_offset;
use fittrack::config::DisplayConfig;
use fittrack::logging::LoggingConfig;
use fittrack::metrics::OneRepMaxFormula;
use fittrack::models::{Intensity, WeightUnit};
use fittrack::Locale;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fittrack-cli",
    about = "FitTrack fitness metric calculator",
    long_about = "Command-line front end for FitTrack body, exercise, progress, and calendar utilities."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Emit JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Locale override (defaults to FITTRACK_LOCALE, then en-US)
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// UTC offset override such as +02:00 (defaults to FITTRACK_UTC_OFFSET, then host offset)
    #[arg(long, global = true, allow_hyphen_values = true)]
    utc_offset: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Body Mass Index and its category
    Bmi {
        /// Body weight
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Unit the weight was recorded in
        #[arg(long, default_value = "kg")]
        unit: WeightUnit,
    },

    /// Calories burned during a workout
    Calories {
        /// Body weight
        #[arg(long)]
        weight: f64,

        /// Workout duration in minutes
        #[arg(long)]
        minutes: u32,

        /// Workout intensity (low, medium, high)
        #[arg(long, default_value = "medium")]
        intensity: Intensity,

        /// Unit the weight was recorded in
        #[arg(long, default_value = "kg")]
        unit: WeightUnit,
    },

    /// Estimated one-rep-max from a submaximal set
    OneRepMax {
        /// Load lifted
        #[arg(long)]
        weight: f64,

        /// Repetitions performed (1-36)
        #[arg(long)]
        reps: u32,

        /// Estimation formula (brzycki, epley, lombardi)
        #[arg(long, default_value = "brzycki")]
        formula: OneRepMaxFormula,
    },

    /// Direction of change between two measurements
    Trend {
        /// Latest measurement
        #[arg(long, allow_hyphen_values = true)]
        current: f64,

        /// Earlier measurement (must be non-zero)
        #[arg(long, allow_hyphen_values = true)]
        previous: f64,
    },

    /// Locale-formatted number
    FormatNumber {
        /// Value to format
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },

    /// Truncate text with an ellipsis
    Truncate {
        /// Text to truncate
        text: String,

        /// Maximum number of characters kept before the ellipsis
        #[arg(long)]
        max_length: usize,
    },

    /// Relative date label, weekday, and today/tomorrow flags
    Date {
        /// RFC 3339 timestamp or YYYY-MM-DD date
        date: String,

        /// Reference instant (RFC 3339) instead of the system clock
        #[arg(long)]
        now: Option<String>,
    },

    /// 12-hour clock time of a timestamp
    Time {
        /// RFC 3339 timestamp
        date: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    let mut settings = DisplayConfig::from_env()?;
    if let Some(locale) = cli.locale {
        settings.locale = locale;
    }
    if let Some(raw) = cli.utc_offset.as_deref() {
        settings.utc_offset = parse_utc_offset(raw)?;
    }
    debug!(
        locale = %settings.locale,
        utc_offset = %settings.utc_offset,
        "Resolved display settings"
    );

    let outcome = match cli.command {
        Command::Bmi {
            weight,
            height,
            unit,
        } => commands::bmi(unit.to_kilograms(weight), height, &settings)?,
        Command::Calories {
            weight,
            minutes,
            intensity,
            unit,
        } => commands::calories(unit.to_kilograms(weight), minutes, intensity)?,
        Command::OneRepMax {
            weight,
            reps,
            formula,
        } => commands::one_rep_max(weight, reps, formula)?,
        Command::Trend { current, previous } => commands::trend(current, previous, &settings)?,
        Command::FormatNumber { value } => commands::format_number(value, &settings),
        Command::Truncate { text, max_length } => commands::truncate(&text, max_length),
        Command::Date { date, now } => commands::date(&date, now.as_deref(), &settings)?,
        Command::Time { date } => commands::time(&date, &settings)?,
    };

    output::print(&outcome, cli.json)?;
    Ok(())
}
