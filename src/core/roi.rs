// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/roi.rs
// Version: 1.0.1
//
// This file implements the return-on-investment estimate, located in the core
// subdirectory. It parses the raw cost fields, computes investment, daily
// income and days to break even, and builds the two-slice chart dataset.
//
// Tree Location:
// - src/core/roi.rs (ROI arithmetic)
// - Depends on: core/types, log

use super::types::{ChartEntry, FormInputs, RoiResult};
use log::debug;

const LOG_TARGET: &str = "asic_roi::roi";

/// Share of the equipment cost earned per day
pub const DAILY_INCOME_RATE: f64 = 0.008;

/// Chart color of the investment slice
pub const INVESTMENT_COLOR: &str = "#0088FE";

/// Chart color of the daily-income slice
pub const DAILY_INCOME_COLOR: &str = "#00C49F";

/// Chart entry name for cost plus delivery
pub const INVESTMENT_LABEL: &str = "Investment";
/// Chart entry name for the estimated daily income
pub const DAILY_INCOME_LABEL: &str = "Daily income";

/// Parse a free-text amount the way a browser number field does
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"2500abc"` reads as 2500. Anything without a numeric prefix, or whose
/// value is not finite, reads as 0.
pub fn parse_amount(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        // "5." keeps only "5"
        end = if frac_end > frac_start { frac_end } else { end };
    }

    if digits == 0 {
        return 0.0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match text[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Compute the ROI estimate for one form submission
///
/// Only the equipment and delivery costs take part. Hashrate, electricity
/// price and tax are collected by the form but do not affect the result.
pub fn calculate_roi(inputs: &FormInputs) -> RoiResult {
    let equipment_cost = parse_amount(&inputs.cost);
    let delivery_cost = parse_amount(&inputs.delivery);

    let total_investment = equipment_cost + delivery_cost;
    let daily_income = if equipment_cost > 0.0 {
        equipment_cost * DAILY_INCOME_RATE
    } else {
        0.0
    };
    let days_to_roi = if daily_income > 0.0 {
        total_investment / daily_income
    } else {
        0.0
    };
    // A negative delivery cost can push this below zero
    let days_to_roi = if days_to_roi.is_finite() { days_to_roi.max(0.0) } else { 0.0 };

    debug!(
        target: LOG_TARGET,
        "🧮 ROI for '{}': investment={:.2} daily={:.2} days={:.2}",
        inputs.model, total_investment, daily_income, days_to_roi
    );

    RoiResult {
        total_investment,
        daily_income,
        days_to_roi,
        chart_data: vec![
            ChartEntry {
                name: INVESTMENT_LABEL.to_string(),
                value: total_investment,
                color: INVESTMENT_COLOR.to_string(),
            },
            ChartEntry {
                name: DAILY_INCOME_LABEL.to_string(),
                value: daily_income,
                color: DAILY_INCOME_COLOR.to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_plain_numbers() {
        assert_eq!(parse_amount("2500"), 2500.0);
        assert_eq!(parse_amount("0.12"), 0.12);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("5."), 5.0);
        assert_eq!(parse_amount("  -3"), -3.0);
        assert_eq!(parse_amount("+7"), 7.0);
    }

    #[test]
    fn test_parse_amount_numeric_prefix() {
        assert_eq!(parse_amount("12.5kg"), 12.5);
        assert_eq!(parse_amount("2500abc"), 2500.0);
        assert_eq!(parse_amount("1e3"), 1000.0);
        assert_eq!(parse_amount("2e"), 2.0);
        assert_eq!(parse_amount("2e+"), 2.0);
        assert_eq!(parse_amount("1.5.2"), 1.5);
    }

    #[test]
    fn test_parse_amount_garbage_is_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("1e400"), 0.0);
    }

    #[test]
    fn test_days_to_roi_never_negative() {
        let inputs = FormInputs {
            cost: "100".to_string(),
            delivery: "-500".to_string(),
            ..Default::default()
        };
        let result = calculate_roi(&inputs);
        assert_eq!(result.days_to_roi, 0.0);
    }
}

// Changelog:
// - v1.0.1 (2026-10-18): Document chart entry labels.
// - v1.0.0 (2026-10-18): Initial ROI calculation.
//   - parse_amount with leading-number semantics and zero fallback.
//   - calculate_roi with 0.8% daily income and finite days-to-ROI.
