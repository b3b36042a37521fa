// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/cli.rs
// Version: 1.0.0
//
// This file renders the one-shot command-line calculation as plain text or
// JSON.
//
// Tree Location:
// - src/cli.rs (CLI output)
// - Depends on: core, utils/format, serde_json

use crate::core::chart::pie_slices;
use crate::core::types::{FormInputs, RoiResult};
use crate::utils::format::FormatUtils;
use std::fmt::Write;

/// Plain-text summary of one calculation
pub fn render_summary(inputs: &FormInputs, result: &RoiResult) -> String {
    let mut out = String::new();
    let model = if inputs.model.trim().is_empty() { "ASIC" } else { inputs.model.trim() };

    let _ = writeln!(out, "⛏️  {}", model);
    let _ = writeln!(
        out,
        "💰 Total investment:   {}",
        FormatUtils::format_currency(result.total_investment)
    );
    let _ = writeln!(
        out,
        "📈 Daily income:       {}",
        FormatUtils::format_currency(result.daily_income)
    );
    let _ = writeln!(
        out,
        "⏱️  Days to break even: {}",
        FormatUtils::format_days(result.days_to_roi)
    );

    let slices = pie_slices(&result.chart_data);
    if !slices.is_empty() {
        let shares: Vec<String> = slices.iter().map(|s| s.label()).collect();
        let _ = writeln!(out, "🥧 {}", shares.join(", "));
    }
    out
}

/// Pretty-printed JSON of one calculation
pub fn render_json(result: &RoiResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

// Changelog:
// - v1.0.0 (2026-10-18): Text summary and JSON output.
