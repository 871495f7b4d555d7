use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::LazyLock;

/// Digits, an optional `.` or `,` separator, then optional digits.
static NUMBER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+[.,]?\d*").expect("number pattern is valid"));

/// Extract every numeric reading from `text`, left to right.
///
/// Handles formats like:
/// - "100" -> 100.0
/// - "12.5" -> 12.5
/// - "1,250" -> 1250.0 (thousands separator)
/// - "100." -> 100.0
/// - "१२०" -> 120.0 (decimal digits of other scripts)
///
/// Tokens that do not convert to a finite float are dropped.
pub fn parse_numbers(text: &str) -> Vec<f64> {
    NUMBER_TOKEN
        .find_iter(text)
        .filter_map(|m| parse_token(m.as_str()))
        .collect()
}

fn parse_token(token: &str) -> Option<f64> {
    let mut normalized = String::with_capacity(token.len());
    for c in token.chars() {
        match c {
            ',' => {}
            '.' => normalized.push('.'),
            _ => normalized.push(ascii_digit(c)?),
        }
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Code point of digit zero for each BMP script with decimal digits.
/// Every such script encodes 0-9 as ten consecutive code points.
const DIGIT_ZEROS: &[u32] = &[
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0,
    0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0,
    0xAA50, 0xABF0, 0xFF10,
];

/// Map a decimal digit from any listed script to its ASCII form.
fn ascii_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    let cp = c as u32;
    DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&cp))
        .and_then(|zero| char::from_digit(cp - zero, 10))
}

/// Round half-to-even at `dp` decimal places.
///
/// Rounds the exact binary value of the float: 50 * 0.0003 is stored just
/// below 0.015 and rounds down to 0.01. Values outside the decimal range
/// fall back to float rounding.
pub fn round_to(value: f64, dp: u32) -> f64 {
    match Decimal::from_f64_retain(value) {
        Some(d) => d
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
            .to_f64()
            .unwrap_or(value),
        None => {
            let scale = 10f64.powi(dp as i32);
            (value * scale).round() / scale
        }
    }
}
