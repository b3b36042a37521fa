// ASIC ROI Calculator - Free and Open Source Software Statement
//
// This project, asic-roi, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.0.1
//
// This file defines core data structures for the ROI calculator, located in
// the core subdirectory. It includes the command-line arguments, the raw form
// inputs, and the computed result with its chart dataset.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, serde

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command-line arguments for the ROI calculator
#[derive(Parser, Debug)]
#[command(
    name = "asic-roi",
    version,
    about = "ASIC miner return-on-investment calculator",
    long_about = "ASIC ROI estimates how many days an ASIC miner needs to pay back its\n\
                  purchase and delivery cost.\n\n\
                  WEB: Serves the calculator form with a pie chart at http://localhost:8080\n\
                  CLI: Computes one estimate from the given values and prints it\n\n\
                  Examples:\n\
                    Web page: asic-roi --web\n\
                    One-shot: asic-roi --model \"Antminer S19 Pro\" --cost 2500 --delivery 300\n\
                    JSON:     asic-roi --cost 2500 --delivery 300 --json\n\n\
                  For more examples, use: asic-roi --examples"
)]
pub struct Args {
    /// Serve the calculator page instead of computing once
    #[arg(long, default_value = "false", help = "Serve the calculator web page")]
    pub web: bool,

    /// Address the web server binds to
    #[arg(
        long,
        default_value = "0.0.0.0:8080",
        value_name = "HOST:PORT",
        help = "Web server bind address"
    )]
    pub bind: String,

    /// ASIC model name, shown in the summary only
    #[arg(long, value_name = "NAME", help = "ASIC model (e.g. Antminer S19 Pro)")]
    pub model: Option<String>,

    /// Hashrate in TH/s (collected, not used by the estimate)
    #[arg(long, value_name = "TH/S", help = "Hashrate in TH/s")]
    pub hashrate: Option<String>,

    /// Equipment cost in dollars
    #[arg(long, value_name = "USD", help = "ASIC cost ($)")]
    pub cost: Option<String>,

    /// Delivery and connection cost in dollars
    #[arg(long, value_name = "USD", help = "Delivery/connection cost ($)")]
    pub delivery: Option<String>,

    /// Electricity price in $/kWh (collected, not used by the estimate)
    #[arg(long, value_name = "USD/KWH", help = "Electricity price ($/kWh)")]
    pub electricity: Option<String>,

    /// Tax percentage (collected, not used by the estimate)
    #[arg(long, value_name = "PERCENT", help = "Tax (%)")]
    pub tax: Option<String>,

    /// Print the result as JSON
    #[arg(long, default_value = "false", help = "Print the result as JSON")]
    pub json: bool,

    /// Application config file (JSON)
    #[arg(long, value_name = "FILE", help = "Path to a JSON config file")]
    pub config: Option<PathBuf>,

    /// Log level for the console and file appenders
    #[arg(
        long,
        default_value = "info",
        value_name = "LEVEL",
        help = "Log level [error, warn, info, debug, trace]"
    )]
    pub log_level: String,

    /// Optional log file
    #[arg(long, value_name = "FILE", help = "Also write logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Print usage examples and exit
    #[arg(long, default_value = "false", help = "Print usage examples and exit")]
    pub examples: bool,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        if self.examples {
            return Ok(());
        }

        if self.web {
            // Only the shape is checked; name resolution happens on bind
            let valid = match self.bind.rsplit_once(':') {
                Some((host, port)) => !host.is_empty() && port.parse::<u16>().is_ok(),
                None => false,
            };
            if !valid {
                return Err(format!(
                    "Bind address must be HOST:PORT (e.g. 0.0.0.0:8080 or localhost:3000), got '{}'",
                    self.bind
                ));
            }
        } else if self.cost.is_none() {
            return Err("Equipment cost is required. Use --cost AMOUNT, or --web to serve the form".to_string());
        }

        match self.log_level.to_ascii_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" | "off" => Ok(()),
            other => Err(format!("Unknown log level '{}'", other)),
        }
    }

    /// Collect the calculator fields into form inputs
    pub fn form_inputs(&self) -> FormInputs {
        FormInputs {
            model: self.model.clone().unwrap_or_default(),
            hashrate: self.hashrate.clone().unwrap_or_default(),
            cost: self.cost.clone().unwrap_or_default(),
            delivery: self.delivery.clone().unwrap_or_default(),
            electricity: self.electricity.clone().unwrap_or_default(),
            tax: self.tax.clone().unwrap_or_default(),
        }
    }
}

/// Raw values entered in the calculator form
///
/// Every field is kept as the text the user typed. Numeric parsing happens
/// in the calculation, so a missing or garbled field never rejects a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInputs {
    /// ASIC model name
    pub model: String,

    /// Hashrate in TH/s
    pub hashrate: String,

    /// Equipment cost ($)
    pub cost: String,

    /// Delivery/connection cost ($)
    pub delivery: String,

    /// Electricity price ($/kWh)
    pub electricity: String,

    /// Tax (%)
    pub tax: String,
}

/// One slice of the result chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub name: String,
    pub value: f64,
    pub color: String,
}

/// Result of one ROI calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    /// Equipment plus delivery cost
    pub total_investment: f64,

    /// Estimated income per day
    pub daily_income: f64,

    /// Days until income covers the investment; always finite and >= 0
    #[serde(rename = "daysToROI")]
    pub days_to_roi: f64,

    /// Investment and daily-income slices, in that order
    pub chart_data: Vec<ChartEntry>,
}

impl RoiResult {
    /// Whole days until break-even, as shown on the summary card
    pub fn days_to_roi_rounded(&self) -> u64 {
        self.days_to_roi.ceil() as u64
    }
}

// Changelog:
// - v1.0.1 (2026-10-18): --bind accepts host names such as localhost:3000.
// - v1.0.0 (2026-10-18): Initial types.
//   - Args with web/CLI modes, logging and config options, and validate().
//   - FormInputs with all-string fields defaulting to empty.
//   - RoiResult and ChartEntry with camelCase JSON.
