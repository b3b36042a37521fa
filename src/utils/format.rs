// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.0.1
//
// This file provides formatting helpers for the ROI calculator, located in the
// utils subdirectory. It formats dollar amounts, day counts and percentages
// the same way on the web page and in CLI output.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

/// Fraction digits needed to print any f64 exactly
const EXACT_FRACTION_DIGITS: usize = 1075;

/// Fixed-point text with `digits` decimals, rounding exact ties away from zero
///
/// `format!("{:.2}")` rounds a value sitting exactly halfway (0.125) to even
/// and prints `0.12`; browsers print `0.13`. Rounding is decided on the exact
/// decimal expansion of the value, so 1.005 (stored as 1.00499...) still
/// prints `1.00`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part.bytes().chain(frac_part.bytes().take(digits)).collect();
    if frac_part.as_bytes().get(digits).is_some_and(|b| *b >= b'5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..int_len].iter().map(|b| *b as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|b| *b as char));
    }
    out
}

/// Utility functions for formatting calculation results
pub struct FormatUtils;

impl FormatUtils {
    /// Format a dollar amount with two decimals, e.g. `$2800.00`
    pub fn format_currency(amount: f64) -> String {
        if amount.is_finite() {
            format!("${}", to_fixed(amount, 2))
        } else {
            "$0.00".to_string()
        }
    }

    /// Format a day count as whole days, rounding up
    pub fn format_days(days: f64) -> String {
        if days.is_finite() && days > 0.0 {
            format!("{}", days.ceil() as u64)
        } else {
            "0".to_string()
        }
    }

    /// Format a 0..=100 share as an integer percentage
    pub fn format_percent(percent: f64) -> String {
        format!("{}%", to_fixed(percent, 0))
    }
}

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(FormatUtils::format_currency(2800.0), "$2800.00");
        assert_eq!(FormatUtils::format_currency(20.0), "$20.00");
        assert_eq!(FormatUtils::format_currency(0.126), "$0.13");
        assert_eq!(FormatUtils::format_currency(0.125), "$0.13");
        assert_eq!(FormatUtils::format_currency(f64::INFINITY), "$0.00");
    }

    #[test]
    fn test_to_fixed_rounds_ties_up() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(99.5, 0), "100");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn test_to_fixed_uses_exact_value() {
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.124, 2), "0.12");
        assert_eq!(to_fixed(9.995, 2), "9.99");
        assert_eq!(to_fixed(9.999, 2), "10.00");
        assert_eq!(to_fixed(2800.0, 2), "2800.00");
        assert_eq!(to_fixed(0.0, 0), "0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(FormatUtils::format_percent(0.5), "1%");
        assert_eq!(FormatUtils::format_percent(99.29), "99%");
    }

    #[test]
    fn test_format_days_rounds_up() {
        assert_eq!(FormatUtils::format_days(140.0), "140");
        assert_eq!(FormatUtils::format_days(140.2), "141");
        assert_eq!(FormatUtils::format_days(0.0), "0");
        assert_eq!(FormatUtils::format_days(f64::NAN), "0");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"S19" & 'Pro'</b>"#),
            "&lt;b&gt;&quot;S19&quot; &amp; &#39;Pro&#39;&lt;/b&gt;"
        );
    }
}

// Changelog:
// - v1.0.1 (2026-10-18): to_fixed rounds exact ties up, used for currency and percent.
// - v1.0.0 (2026-10-18): Currency, day and percent formatting, HTML escaping.
