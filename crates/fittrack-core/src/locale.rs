// ABOUTME: Display locales with number separators and weekday/month name tables
// ABOUTME: Supports en-US (default), en-GB, and de-DE for dashboard formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Display locales
//!
//! Formatting never reads the host locale. Callers pick a [`Locale`]
//! explicitly (usually through configuration) and the tables here supply
//! separators, calendar names, and the weekday/month/day layout.

use crate::errors::AppError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const EN_WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const DE_WEEKDAYS: [&str; 7] = [
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
    "Sonntag",
];

const EN_US_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const EN_GB_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

const DE_MONTHS: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
];

/// Display locale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (United States): `1,234.5`, `Monday, Mar 24`
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// English (United Kingdom): `1,234.5`, `Monday 24 Mar`
    #[serde(rename = "en-GB")]
    EnGb,
    /// German (Germany): `1.234,5`, `Montag, 24. März`
    #[serde(rename = "de-DE")]
    DeDe,
}

impl Locale {
    /// BCP 47 language tag
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::DeDe => "de-DE",
        }
    }

    /// Separator between thousands groups
    #[must_use]
    pub const fn group_separator(self) -> char {
        match self {
            Self::EnUs | Self::EnGb => ',',
            Self::DeDe => '.',
        }
    }

    /// Separator between integer and fraction digits
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::EnUs | Self::EnGb => '.',
            Self::DeDe => ',',
        }
    }

    /// Full weekday name
    #[must_use]
    pub fn weekday_name(self, weekday: Weekday) -> &'static str {
        let index = weekday.num_days_from_monday() as usize;
        match self {
            Self::EnUs | Self::EnGb => EN_WEEKDAYS[index],
            Self::DeDe => DE_WEEKDAYS[index],
        }
    }

    /// Abbreviated month name for a 1-based month number
    ///
    /// Out-of-range months clamp into `1..=12`; chrono never produces them.
    #[must_use]
    pub fn month_abbreviation(self, month: u32) -> &'static str {
        let index = (month.clamp(1, 12) - 1) as usize;
        match self {
            Self::EnUs => EN_US_MONTHS[index],
            Self::EnGb => EN_GB_MONTHS[index],
            Self::DeDe => DE_MONTHS[index],
        }
    }

    /// Label for the current calendar day
    #[must_use]
    pub const fn today_label(self) -> &'static str {
        match self {
            Self::EnUs | Self::EnGb => "Today",
            Self::DeDe => "Heute",
        }
    }

    /// Label for the next calendar day
    #[must_use]
    pub const fn tomorrow_label(self) -> &'static str {
        match self {
            Self::EnUs | Self::EnGb => "Tomorrow",
            Self::DeDe => "Morgen",
        }
    }

    /// Weekday, abbreviated month, and day-of-month in this locale's layout
    #[must_use]
    pub fn weekday_month_day(self, weekday: Weekday, month: u32, day: u32) -> String {
        let weekday = self.weekday_name(weekday);
        let month = self.month_abbreviation(month);
        match self {
            Self::EnUs => format!("{weekday}, {month} {day}"),
            Self::EnGb => format!("{weekday} {day} {month}"),
            Self::DeDe => format!("{weekday}, {day}. {month}"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_lowercase().as_str() {
            "en" | "en-us" => Ok(Self::EnUs),
            "en-gb" => Ok(Self::EnGb),
            "de" | "de-de" => Ok(Self::DeDe),
            other => Err(AppError::invalid_input(format!(
                "Unsupported locale: '{other}'. Valid options: en-US, en-GB, de-DE"
            ))),
        }
    }
}
