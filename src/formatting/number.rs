// ABOUTME: Locale-aware number formatting with thousands grouping
// ABOUTME: Up to three fraction digits, trailing zeros dropped, NaN and infinity spelled out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use fittrack_core::constants::display::{GROUP_SIZE, MAX_FRACTION_DIGITS};
use fittrack_core::Locale;

/// Format a number for display in `locale`
///
/// - Integer digits are grouped in threes with the locale's group separator
/// - At most three fraction digits are kept (rounded), trailing zeros dropped
/// - `NaN` renders as `"NaN"`, infinities as `"∞"` and `"-∞"`
/// - Values that round to zero keep the sign of the input (`-0.0001` → `"-0"`)
///
/// ```rust
/// use fittrack::formatting::format_number;
/// use fittrack::Locale;
///
/// assert_eq!(format_number(1_234_567.891, Locale::EnUs), "1,234,567.891");
/// assert_eq!(format_number(1_234.5, Locale::DeDe), "1.234,5");
/// ```
#[must_use]
pub fn format_number(value: f64, locale: Locale) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-∞" } else { "∞" }.to_owned();
    }

    let (integer, fraction) = round_half_away(value.abs(), MAX_FRACTION_DIGITS);

    let capacity = integer.len() + integer.len() / GROUP_SIZE + fraction.len() + 2;
    let mut out = String::with_capacity(capacity);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_digits(&integer, locale.group_separator()));
    if !fraction.is_empty() {
        out.push(locale.decimal_separator());
        out.push_str(&fraction);
    }
    out
}

/// Round a finite non-negative value to `places` fraction digits
///
/// Works on the shortest round-trip decimal digits, so `1.0625` rounds to
/// `1.063` and `1e23` keeps its decimal spelling. Ties round away from zero.
/// Returns the integer digits and the fraction digits with trailing zeros
/// dropped.
fn round_half_away(value: f64, places: usize) -> (String, String) {
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    // Digits before the decimal point; pad so there is at least one
    let mut point = 1;
    if exponent < 0 {
        let mut padded = vec![b'0'; exponent.unsigned_abs() as usize];
        padded.append(&mut digits);
        digits = padded;
    } else {
        point += exponent as usize;
    }
    let keep = point + places;
    if digits.len() < keep {
        digits.resize(keep, b'0');
    }

    let round_up = digits.get(keep).is_some_and(|digit| *digit >= b'5');
    digits.truncate(keep);
    if round_up && !increment(&mut digits) {
        digits.insert(0, b'1');
        point += 1;
    }

    let (integer, fraction) = digits.split_at(point);
    let integer = String::from_utf8_lossy(integer);
    let integer = integer.trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };
    let fraction = String::from_utf8_lossy(fraction);
    (
        integer.to_owned(),
        fraction.trim_end_matches('0').to_owned(),
    )
}

/// Add one to the last digit; returns `false` when the carry runs off the front
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / GROUP_SIZE);
    let lead = digits.len() % GROUP_SIZE;
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (index + GROUP_SIZE - lead) % GROUP_SIZE == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounded(value: f64) -> (String, String) {
        round_half_away(value, MAX_FRACTION_DIGITS)
    }

    #[test]
    fn test_round_half_away_on_shortest_digits() {
        assert_eq!(rounded(1.0625), ("1".to_owned(), "063".to_owned()));
        assert_eq!(rounded(0.0625), ("0".to_owned(), "063".to_owned()));
        assert_eq!(rounded(0.0005), ("0".to_owned(), "001".to_owned()));
        assert_eq!(rounded(0.0004), ("0".to_owned(), String::new()));
        assert_eq!(rounded(9.9995), ("10".to_owned(), String::new()));
        assert_eq!(rounded(0.0), ("0".to_owned(), String::new()));
        assert_eq!(rounded(1e23), ("1".to_owned() + &"0".repeat(23), String::new()));
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", ','), "1");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("1234", ','), "1,234");
        assert_eq!(group_digits("123456", '.'), "123.456");
        assert_eq!(group_digits("1234567", ','), "1,234,567");
    }
}
